use leptos::prelude::*;
use leptos_use::{
    use_mouse_with_options, use_window_size, UseMouseCoordType, UseMouseOptions, UseMouseReturn,
    UseWindowSizeReturn,
};

use super::{Icon, IconKind};
use crate::content::profile::{HERO_STATS, NAME, RESUME_PATH};
use crate::state::{pointer_offset, Shape};

#[component]
pub fn HeroSection() -> impl IntoView {
    // Client coordinates: the blobs follow the pointer within the viewport,
    // whatever the scroll position.
    let UseMouseReturn { x, y, .. } =
        use_mouse_with_options(UseMouseOptions::default().coord_type(UseMouseCoordType::<std::convert::Infallible>::Client));
    let UseWindowSizeReturn { width, height, .. } = use_window_size();
    let offset = Memo::new(move |_| pointer_offset((x.get(), y.get()), (width.get(), height.get())));

    let blob_style = move |shape: Shape| {
        move || format!("transform: {}", shape.transform(offset.get()))
    };

    view! {
        <section class="hero">
            <div class="hero__blob hero__blob--primary" style=blob_style(Shape::Primary) />
            <div class="hero__blob hero__blob--secondary" style=blob_style(Shape::Secondary) />
            <div class="hero__grid" />

            <div class="container hero__content stagger">
                <div class="hero__badge">
                    <span class="hero__pulse" />
                    "Available for work"
                </div>

                <h1 class="hero__title">
                    "Hi, I'm " <span class="gradient-text">{NAME}</span>
                </h1>

                <p class="hero__subtitle">
                    "A passionate full-stack developer transforming ideas into high-quality digital "
                    "products with clean design, powerful functionality, and excellent performance."
                </p>

                <dl class="hero__stats">
                    {HERO_STATS
                        .iter()
                        .map(|stat| view! {
                            <div class="hero__stat">
                                <dt class="gradient-text">{stat.value}</dt>
                                <dd>{stat.label}</dd>
                            </div>
                        })
                        .collect_view()}
                </dl>

                <div class="hero__actions">
                    <a href="#contact" class="btn btn--primary btn--lg">
                        <Icon kind=IconKind::Mail />
                        "Work with me"
                    </a>
                    <a href="#projects" class="btn btn--glass btn--lg">"View Projects"</a>
                    <a href=RESUME_PATH target="_blank" class="btn btn--outline">
                        <Icon kind=IconKind::Download />
                        "Resume"
                    </a>
                </div>
            </div>

            <a href="#about" class="hero__scroll">
                <span>"Scroll"</span>
                <Icon kind=IconKind::ArrowDown />
            </a>
        </section>
    }
}
