use leptos::{ev, prelude::*};

use super::{use_toasts, Icon, IconKind, Reveal, RevealFrom, SectionHeader};
use crate::content::profile::{contact_socials, EMAIL, LOCATION, PHONE};
use crate::state::{ContactField, ContactForm, SUBMIT_DELAY};

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="section section--muted contact">
            <div class="container">
                <SectionHeader
                    eyebrow="Get In Touch"
                    title="Let's Work"
                    highlight="Together"
                    blurb="Have a project in mind? I'd love to hear about it. Let's discuss how we can bring your ideas to life."
                />

                <div class="contact__grid">
                    <Reveal from=RevealFrom::Left class="contact__info">
                        <ContactInfo />
                    </Reveal>
                    <Reveal from=RevealFrom::Right class="contact__form-wrap">
                        <ContactFormView />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <h3>"Contact Information"</h3>
        <p class="muted">
            "Feel free to reach out through any of the following channels. I typically respond within 24 hours."
        </p>

        <ul class="contact__channels">
            <li>
                <a href=format!("mailto:{EMAIL}") class="contact__channel">
                    <Icon kind=IconKind::Mail />
                    <div>
                        <p class="muted">"Email"</p>
                        <p>{EMAIL}</p>
                    </div>
                </a>
            </li>
            <li class="contact__channel">
                <Icon kind=IconKind::MapPin />
                <div>
                    <p class="muted">"Location"</p>
                    <p>{LOCATION}</p>
                </div>
            </li>
            <li class="contact__channel">
                <Icon kind=IconKind::Phone />
                <div>
                    <p class="muted">"Phone"</p>
                    <p>{PHONE}</p>
                </div>
            </li>
        </ul>

        <h4>"Connect with me"</h4>
        <div class="social-links">
            {contact_socials()
                .iter()
                .map(|social| view! {
                    <a
                        href=social.href
                        target="_blank"
                        rel="noopener noreferrer"
                        class="social-link"
                        aria-label=social.label
                    >
                        <Icon kind=social.network />
                    </a>
                })
                .collect_view()}
        </div>
    }
}

/// The form itself. Delivery is simulated: after [`SUBMIT_DELAY`] the fields
/// are cleared and a toast thanks the visitor.
#[component]
fn ContactFormView() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let submitting = Memo::new(move |_| form.with(ContactForm::is_submitting));
    let toasts = use_toasts();

    let on_submit = move |event: ev::SubmitEvent| {
        event.prevent_default();

        match form.try_update(ContactForm::begin_submit) {
            Some(Ok(draft)) => {
                log::info!(
                    "contact message from {} <{}> about {:?}",
                    draft.name,
                    draft.email,
                    draft.subject
                );
                set_timeout(
                    move || {
                        if let Some(Some(ack)) = form.try_update(ContactForm::finish_submit) {
                            toasts.notify(ack.title, ack.description);
                        }
                    },
                    SUBMIT_DELAY,
                );
            }
            Some(Err(err)) => log::debug!("contact submission ignored: {err}"),
            None => {}
        }
    };

    let value = move |field: ContactField| move || form.with(|f| f.value(field).to_string());
    let on_input = move |field: ContactField| {
        move |event: ev::Event| {
            let text = event_target_value(&event);
            form.update(|f| f.update(field, text));
        }
    };

    view! {
        <form class="contact-form glass-card" on:submit=on_submit>
            <div class="contact-form__row">
                <div class="contact-form__field">
                    <label for="name">"Name"</label>
                    <input
                        type="text"
                        id="name"
                        name=ContactField::Name.name()
                        required
                        placeholder="Your name"
                        prop:value=value(ContactField::Name)
                        on:input=on_input(ContactField::Name)
                    />
                </div>
                <div class="contact-form__field">
                    <label for="email">"Email"</label>
                    <input
                        type="email"
                        id="email"
                        name=ContactField::Email.name()
                        required
                        placeholder="your@email.com"
                        prop:value=value(ContactField::Email)
                        on:input=on_input(ContactField::Email)
                    />
                </div>
            </div>

            <div class="contact-form__field">
                <label for="subject">"Subject"</label>
                <input
                    type="text"
                    id="subject"
                    name=ContactField::Subject.name()
                    required
                    placeholder="What's this about?"
                    prop:value=value(ContactField::Subject)
                    on:input=on_input(ContactField::Subject)
                />
            </div>

            <div class="contact-form__field">
                <label for="message">"Message"</label>
                <textarea
                    id="message"
                    name=ContactField::Message.name()
                    required
                    rows="5"
                    placeholder="Tell me about your project..."
                    prop:value=value(ContactField::Message)
                    on:input=on_input(ContactField::Message)
                />
            </div>

            <button
                type="submit"
                class="btn btn--primary btn--block btn--lg"
                disabled=submitting
            >
                {move || {
                    if submitting.get() {
                        view! { <span>"Sending..."</span> }.into_any()
                    } else {
                        view! {
                            <Icon kind=IconKind::Send />
                            "Send Message"
                        }
                        .into_any()
                    }
                }}
            </button>

            <p class="contact-form__note">
                "By submitting this form, you agree to our privacy policy. Your data will never be shared."
            </p>
        </form>
    }
}
