use leptos::prelude::*;

use super::Reveal;

/// Eyebrow, two-tone heading and blurb shared by the content sections.
#[component]
pub fn SectionHeader(
    eyebrow: &'static str,
    /// Plain lead-in of the heading
    title: &'static str,
    /// Gradient tail of the heading
    highlight: &'static str,
    #[prop(optional)] blurb: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="section-header">
            <Reveal>
                <span class="section-eyebrow">{eyebrow}</span>
            </Reveal>
            <Reveal delay_ms=100>
                <h2 class="section-heading">
                    {title} " " <span class="gradient-text">{highlight}</span>
                </h2>
            </Reveal>
            {blurb.map(|text| view! {
                <Reveal delay_ms=200>
                    <p class="section-subheading">{text}</p>
                </Reveal>
            })}
        </div>
    }
}
