use leptos::prelude::*;

use super::{FilterBar, ProjectGrid, ProjectGridEmpty, ProjectModal, Reveal, SectionHeader};
use crate::content::projects::filter_options;
use crate::content::{Project, ProjectCategory, PROJECTS};
use crate::state::{CategoryFilter, DetailOverlay};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let (active, set_active) = signal(CategoryFilter::<ProjectCategory>::All);
    let overlay = RwSignal::new(DetailOverlay::<&'static Project>::Closed);

    let visible = Memo::new(move |_| active.get().apply(PROJECTS));
    let count = Signal::derive(move || visible.with(Vec::len));

    let open = move |project: &'static Project| {
        log::debug!("opening project {}", project.id);
        overlay.update(|o| o.select(project));
    };

    view! {
        <section id="projects" class="section projects">
            <div class="container">
                <SectionHeader
                    eyebrow="My Work"
                    title="Featured"
                    highlight="Projects"
                    blurb="A selection of projects that showcase my skills and passion for building great products."
                />

                <Reveal delay_ms=300>
                    <FilterBar
                        options=filter_options()
                        active=active
                        on_select=move |filter| set_active.set(filter)
                        count=count
                        noun="projects"
                    />
                </Reveal>

                <Show
                    when=move || { count.get() > 0 }
                    fallback=|| view! { <ProjectGridEmpty /> }
                >
                    <ProjectGrid projects=visible overlay=overlay.read_only() on_open=open />
                </Show>
            </div>
        </section>

        <ProjectModal overlay=overlay />
    }
}
