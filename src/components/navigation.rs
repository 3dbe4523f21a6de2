use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::{Icon, IconKind, ThemeToggle};
use crate::content::profile::{MONOGRAM, NAV_ITEMS};
use crate::state::{is_scrolled, MobileMenu};

/// Fixed header: compacts once the page scrolls, collapses into a drawer on
/// small screens.
#[component]
pub fn Navigation() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Signal::derive(move || is_scrolled(scroll_y.get()));
    let menu = RwSignal::new(MobileMenu::default());

    view! {
        <header class=move || if scrolled.get() { "site-header site-header--scrolled" } else { "site-header" }>
            <div class="container site-header__inner">
                <a href="#" class="site-header__brand gradient-text">{MONOGRAM}</a>

                <nav class="site-nav" aria-label="Primary">
                    {NAV_ITEMS
                        .iter()
                        .enumerate()
                        .map(|(index, item)| view! {
                            <a
                                href=item.href
                                class="nav-link"
                                style=format!("animation-delay: {}ms", index * 100)
                            >
                                {item.label}
                            </a>
                        })
                        .collect_view()}
                </nav>

                <div class="site-header__actions">
                    <ThemeToggle />
                    <a href="#contact" class="btn btn--primary site-header__cta">"Let's Talk"</a>
                    <button
                        type="button"
                        class="site-header__menu-btn"
                        aria-label="Open menu"
                        aria-expanded=move || menu.get().is_open().to_string()
                        on:click=move |_| menu.update(MobileMenu::open)
                    >
                        <Icon kind=IconKind::Menu />
                    </button>
                </div>
            </div>
        </header>

        <Show when=move || { menu.get().is_open() }>
            <MobileDrawer menu=menu />
        </Show>
    }
}

#[component]
fn MobileDrawer(menu: RwSignal<MobileMenu>) -> impl IntoView {
    let follow = move |href: &'static str| {
        menu.update(|m| {
            m.select(href);
        });
    };

    view! {
        <div class="mobile-menu" role="dialog" aria-modal="true" aria-label="Navigation">
            <div class="mobile-menu__top">
                <span class="gradient-text mobile-menu__brand">{MONOGRAM}</span>
                <button
                    type="button"
                    aria-label="Close menu"
                    on:click=move |_| menu.update(MobileMenu::close)
                >
                    <Icon kind=IconKind::Close />
                </button>
            </div>

            <nav class="mobile-menu__links">
                {NAV_ITEMS
                    .iter()
                    .enumerate()
                    .map(|(index, item)| view! {
                        <a
                            href=item.href
                            style=format!("animation-delay: {}ms", index * 100)
                            on:click=move |_| follow(item.href)
                        >
                            {item.label}
                        </a>
                    })
                    .collect_view()}
            </nav>

            <a href="#contact" class="btn btn--primary mobile-menu__cta" on:click=move |_| follow("#contact")>
                "Let's Talk"
            </a>
        </div>
    }
}
