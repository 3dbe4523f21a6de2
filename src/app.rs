use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::components::{
    provide_toasts, stored_mode, AboutSection, AchievementsSection, CertificationsSection,
    ContactSection, Footer, HeroSection, Navigation, ProjectsSection, SkillsSection, Toaster,
};
use crate::content::profile::NAME;
use crate::error::UnknownColorMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    Light,
    #[default]
    Dark,
}

impl ColorMode {
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Light => write!(f, "light"),
            ColorMode::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for ColorMode {
    type Err = UnknownColorMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            other => Err(UnknownColorMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    pub mode: ReadSignal<ColorMode>,
    pub set_mode: WriteSignal<ColorMode>,
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let (mode, set_mode) = signal(ColorMode::default());
    provide_context(ThemeContext { mode, set_mode });
    provide_toasts();

    // Effects only run in the browser, after hydration
    Effect::new(move |_| {
        if let Some(stored) = stored_mode() {
            set_mode.set(stored);
        }
    });

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>

        <Title text=format!("{NAME} | Full Stack Developer")/>
        <Meta name="color-scheme" content="dark light"/>

        <Router>
            <div class=move || format!("page theme-{}", mode.get())>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
                <Toaster />
            </div>
        </Router>
    }
}

/// The whole site: every section stacked in reading order.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Navigation />
        <main>
            <HeroSection />
            <AboutSection />
            <SkillsSection />
            <ProjectsSection />
            <AchievementsSection />
            <CertificationsSection />
            <ContactSection />
        </main>
        <Footer />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_mode_round_trips_through_cookie_value() {
        for mode in [ColorMode::Light, ColorMode::Dark] {
            assert_eq!(mode.to_string().parse::<ColorMode>(), Ok(mode));
        }
    }

    #[test]
    fn unknown_cookie_value_is_rejected() {
        assert_eq!(
            "sepia".parse::<ColorMode>(),
            Err(UnknownColorMode("sepia".to_string()))
        );
        assert!("".parse::<ColorMode>().is_err());
    }

    #[test]
    fn toggle_flips_between_modes() {
        assert_eq!(ColorMode::Dark.toggled(), ColorMode::Light);
        assert_eq!(ColorMode::Light.toggled().toggled(), ColorMode::Light);
    }
}
