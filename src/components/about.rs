use leptos::prelude::*;

use super::{Reveal, RevealFrom};
use crate::content::profile::{ABOUT_HIGHLIGHTS, ABOUT_PARAGRAPHS, PROFILE_IMAGE};

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="section about">
            <div class="container about__grid">
                <Reveal from=RevealFrom::Left class="about__portrait">
                    <div class="about__frame">
                        <img src=PROFILE_IMAGE alt="Profile" />
                    </div>
                    <div class="about__badge about__badge--top">"🚀 Full Stack"</div>
                    <div class="about__badge about__badge--bottom">"✨ DevOps"</div>
                </Reveal>

                <div class="about__text">
                    <Reveal>
                        <span class="section-eyebrow">"About Me"</span>
                        <h2 class="section-heading">
                            "Turning Ideas Into " <span class="gradient-text">"Digital Reality"</span>
                        </h2>
                    </Reveal>

                    {ABOUT_PARAGRAPHS
                        .iter()
                        .zip(1u32..)
                        .map(|(paragraph, step)| view! {
                            <Reveal delay_ms={step * 100}>
                                <p class="about__paragraph">{*paragraph}</p>
                            </Reveal>
                        })
                        .collect_view()}

                    <Reveal delay_ms=300 class="about__highlights">
                        {ABOUT_HIGHLIGHTS
                            .iter()
                            .map(|item| view! {
                                <div class="about__highlight">
                                    <span class="about__highlight-icon">{item.icon}</span>
                                    <h4>{item.label}</h4>
                                    <p>{item.description}</p>
                                </div>
                            })
                            .collect_view()}
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
