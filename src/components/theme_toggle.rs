use leptos::prelude::*;

use super::{Icon, IconKind};
use crate::app::{ColorMode, ThemeContext};

/// Cookie holding the visitor's colour mode between visits.
const THEME_COOKIE: &str = "portfolio-theme";

#[cfg(target_arch = "wasm32")]
mod cookie {
    use leptos::wasm_bindgen::prelude::wasm_bindgen;

    #[wasm_bindgen(inline_js = "
        export function set_theme_cookie(name, value) {
            document.cookie = name + '=' + value + '; path=/; max-age=31536000; samesite=lax';
        }
        export function get_theme_cookie(name) {
            const prefix = name + '=';
            const entry = document.cookie.split('; ').find((c) => c.startsWith(prefix));
            return entry ? entry.substring(prefix.length) : '';
        }
    ")]
    extern "C" {
        pub fn set_theme_cookie(name: &str, value: &str);
        pub fn get_theme_cookie(name: &str) -> String;
    }
}

/// Mode stored by an earlier visit, if any.
pub fn stored_mode() -> Option<ColorMode> {
    #[cfg(target_arch = "wasm32")]
    {
        cookie::get_theme_cookie(THEME_COOKIE).parse().ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

fn store_mode(mode: ColorMode) {
    #[cfg(target_arch = "wasm32")]
    cookie::set_theme_cookie(THEME_COOKIE, &mode.to_string());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = mode;
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    let toggle = move |_| {
        let next = theme.mode.get_untracked().toggled();
        store_mode(next);
        log::debug!("colour mode switched to {next}");
        theme.set_mode.set(next);
    };

    let is_dark = move || theme.mode.get() == ColorMode::Dark;

    let label = move || {
        if is_dark() {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        }
    };

    view! {
        <button
            type="button"
            class=move || if is_dark() { "theme-toggle theme-toggle--dark" } else { "theme-toggle theme-toggle--light" }
            on:click=toggle
            aria-label=label
            title=label
        >
            <span class="theme-toggle__icon theme-toggle__icon--light" aria-hidden="true">
                <Icon kind=IconKind::Sun />
            </span>
            <span class="theme-toggle__icon theme-toggle__icon--dark" aria-hidden="true">
                <Icon kind=IconKind::Moon />
            </span>
        </button>
    }
}
