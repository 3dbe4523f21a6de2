use chrono::Datelike;
use leptos::prelude::*;

use super::{Icon, IconKind};
use crate::content::profile::{FOOTER_LINKS, NAME, SOCIAL_LINKS, TAGLINE};

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="site-footer">
            <div class="container site-footer__inner">
                <div class="site-footer__brand">
                    <a href="#" class="gradient-text">{NAME}</a>
                    <p class="muted">{TAGLINE}</p>
                </div>

                <nav class="site-footer__links">
                    {FOOTER_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href>{link.label}</a> })
                        .collect_view()}
                </nav>

                <div class="social-links social-links--small">
                    {SOCIAL_LINKS
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
            </div>

            <p class="site-footer__copyright muted">
                "© " {year} " " {NAME} ". Made with "
                <Icon kind=IconKind::Heart class="icon--accent icon--xs" />
                " All rights reserved."
            </p>
        </footer>
    }
}
