use leptos::prelude::*;

use crate::state::{Category, CategoryFilter};

/// Row of category buttons above a filterable grid.
#[component]
pub fn FilterBar<C>(
    options: Vec<CategoryFilter<C>>,
    #[prop(into)] active: Signal<CategoryFilter<C>>,
    #[prop(into)] on_select: Callback<CategoryFilter<C>>,
    /// Number of entries the current selection shows
    #[prop(optional, into)]
    count: Option<Signal<usize>>,
    /// Plural noun for the count, e.g. "projects"
    #[prop(optional)]
    noun: &'static str,
) -> impl IntoView
where
    C: Category + Send + Sync,
{
    view! {
        <div class="filter-bar">
            <div class="filter-options" role="group">
                {options
                    .into_iter()
                    .map(|option| {
                        let is_active = move || option.is_active(active.get());
                        view! {
                            <button
                                type="button"
                                class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                                aria-pressed=move || is_active().to_string()
                                on:click=move |_| on_select.run(option)
                            >
                                {option.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            {count.map(|count| view! {
                <span class="filter-count">{move || count.get()} " " {noun}</span>
            })}
        </div>
    }
}
