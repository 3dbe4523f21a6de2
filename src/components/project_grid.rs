use leptos::prelude::*;

use super::ProjectCard;
use crate::content::Project;
use crate::state::DetailOverlay;

const STAGGER_MS: u32 = 100;

/// Pairs each visible project with the fade-in delay for its slot.
fn staggered(projects: Vec<&'static Project>) -> Vec<(&'static Project, u32)> {
    projects.into_iter().zip((0u32..).map(|slot| slot * STAGGER_MS)).collect()
}

#[component]
pub fn ProjectGrid(
    #[prop(into)] projects: Signal<Vec<&'static Project>>,
    overlay: ReadSignal<DetailOverlay<&'static Project>>,
    #[prop(into)] on_open: Callback<&'static Project>,
) -> impl IntoView {
    view! {
        <ul class="project-list">
            // Keyed by slot as well, so a card that moves after re-filtering
            // is rebuilt with the delay of its new position.
            <For
                each=move || staggered(projects.get())
                key=|(p, delay_ms)| (p.id, *delay_ms)
                children=move |(project, delay_ms)| {
                    let showing = Signal::derive(move || overlay.with(|o| o.is_showing(&project)));
                    view! {
                        <ProjectCard
                            project=project
                            delay_ms=delay_ms
                            showing=showing
                            on_open=on_open
                        />
                    }
                }
            />
        </ul>
    }
}

#[component]
pub fn ProjectGridEmpty() -> impl IntoView {
    view! {
        <div class="project-empty">
            <svg viewBox="0 0 200 200" class="project-empty-art">
                <defs>
                    <linearGradient id="emptyGrad" x1="0%" y1="0%" x2="100%" y2="100%">
                        <stop offset="0%" style="stop-color:var(--primary);stop-opacity:0.3" />
                        <stop offset="100%" style="stop-color:var(--secondary);stop-opacity:0.1" />
                    </linearGradient>
                </defs>
                <rect x="30" y="45" width="140" height="110" rx="12" fill="none" stroke="currentColor" stroke-opacity="0.25" stroke-width="1"/>
                <line x1="30" y1="75" x2="170" y2="75" stroke="currentColor" stroke-opacity="0.25" stroke-width="1"/>
                <circle cx="45" cy="60" r="3" fill="currentColor" fill-opacity="0.25"/>
                <circle cx="57" cy="60" r="3" fill="currentColor" fill-opacity="0.25"/>
                <circle cx="100" cy="115" r="22" fill="url(#emptyGrad)"/>
            </svg>
            <p class="project-empty-text">"No projects in this category yet"</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ProjectCategory, PROJECTS};
    use crate::state::CategoryFilter;

    fn delay_of(grid: &[(&'static Project, u32)], id: &str) -> Option<u32> {
        grid.iter().find(|(p, _)| p.id == id).map(|(_, delay)| *delay)
    }

    #[test]
    fn delays_follow_grid_order() {
        let grid = staggered(CategoryFilter::All.apply(PROJECTS));
        let delays: Vec<_> = grid.iter().map(|(_, delay)| *delay).collect();
        assert_eq!(delays, [0, 100, 200]);
    }

    #[test]
    fn refiltered_card_takes_the_delay_of_its_new_slot() {
        let all = staggered(CategoryFilter::All.apply(PROJECTS));
        let dashboards = staggered(CategoryFilter::Only(ProjectCategory::Dashboard).apply(PROJECTS));

        assert_eq!(delay_of(&all, "2"), Some(100));
        assert_eq!(delay_of(&dashboards, "2"), Some(0));
    }
}
