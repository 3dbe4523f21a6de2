use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener};

use super::{Icon, IconKind};
use crate::content::Project;
use crate::state::{Category, DetailOverlay, DismissReason};

/// Detail overlay for the selected project. Clicking the backdrop, the close
/// button or pressing Escape all close it; clicks inside the panel do not.
#[component]
pub fn ProjectModal(overlay: RwSignal<DetailOverlay<&'static Project>>) -> impl IntoView {
    let dismiss = move |reason: DismissReason| {
        overlay.maybe_update(|o| o.dismiss(reason));
    };

    let _ = use_event_listener(use_document(), ev::keydown, move |event| {
        if event.key() == "Escape" && overlay.with_untracked(DetailOverlay::is_open) {
            dismiss(DismissReason::Escape);
        }
    });

    view! {
        {move || overlay.get().selected().copied().map(|project| view! {
            <div
                class="modal-backdrop"
                on:click=move |_| dismiss(DismissReason::Backdrop)
            >
                <article
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="project-modal-title"
                    on:click=|event| event.stop_propagation()
                >
                    <ProjectDetails project=project />
                    <button
                        type="button"
                        class="modal__close"
                        aria-label="Close modal"
                        on:click=move |_| dismiss(DismissReason::CloseButton)
                    >
                        <Icon kind=IconKind::Close />
                    </button>
                </article>
            </div>
        })}
    }
}

#[component]
fn ProjectDetails(project: &'static Project) -> impl IntoView {
    let sections = [
        ("Problem", project.problem),
        ("Solution", project.solution),
        ("Results", project.results),
    ];

    view! {
        <div class="modal__media">
            <img src=project.image alt=project.title />
        </div>
        <div class="modal__content">
            <div class="modal__meta">
                <span class="pill">{project.category.label()}</span>
                <span class="muted">{project.role}</span>
            </div>

            <h3 id="project-modal-title" class="modal__title">{project.title}</h3>
            <p class="muted">{project.description}</p>

            <div class="modal__story">
                {sections
                    .into_iter()
                    .map(|(heading, text)| view! {
                        <div class="modal__story-block">
                            <h4>{heading}</h4>
                            <p>{text}</p>
                        </div>
                    })
                    .collect_view()}
            </div>

            <h4>"Tech Stack"</h4>
            <div class="modal__tech">
                {project.tech_stack.iter().map(|t| view! { <span class="tag tag--round">{*t}</span> }).collect_view()}
            </div>

            <div class="modal__links">
                {project.live_url.map(|href| view! {
                    <a href=href target="_blank" rel="noopener noreferrer" class="btn btn--primary">
                        <Icon kind=IconKind::ExternalLink />
                        "Live Demo"
                    </a>
                })}
                {project.github_url.map(|href| view! {
                    <a href=href target="_blank" rel="noopener noreferrer" class="btn btn--outline">
                        <Icon kind=IconKind::GitHub />
                        "Source Code"
                    </a>
                })}
            </div>
        </div>
    }
}
