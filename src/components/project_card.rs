use leptos::prelude::*;

use crate::content::Project;
use crate::state::Category;

#[component]
pub fn ProjectCard(
    project: &'static Project,
    /// Delay before the card fades in, for staggering a grid
    #[prop(optional)]
    delay_ms: u32,
    /// Whether this project's details are currently open
    #[prop(into)]
    showing: Signal<bool>,
    #[prop(into)] on_open: Callback<&'static Project>,
) -> impl IntoView {
    let (tech, hidden) = project.card_tech();

    view! {
        <li class="project-card">
            <button
                type="button"
                class="project-card__hit"
                style=format!("animation-delay: {delay_ms}ms")
                aria-haspopup="dialog"
                aria-expanded=move || showing.get().to_string()
                on:click=move |_| on_open.run(project)
            >
                <div class="project-card__media">
                    <img src=project.image alt=project.title loading="lazy" />
                </div>
                <div class="project-card__body">
                    <span class="pill">{project.category.label()}</span>
                    <h3 class="project-card__title">{project.title}</h3>
                    <p class="project-card__summary">{project.summary}</p>
                    <div class="project-card__tech">
                        {tech.iter().map(|t| view! { <span class="tag">{*t}</span> }).collect_view()}
                        {(hidden > 0).then(|| view! { <span class="tag">"+" {hidden}</span> })}
                    </div>
                </div>
            </button>
        </li>
    }
}
