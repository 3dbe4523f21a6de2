use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::state::RevealLatch;

/// Where a revealed element slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealFrom {
    #[default]
    Below,
    Left,
    Right,
    Scale,
}

impl RevealFrom {
    fn class(self) -> &'static str {
        match self {
            RevealFrom::Below => "reveal reveal--up",
            RevealFrom::Left => "reveal reveal--left",
            RevealFrom::Right => "reveal reveal--right",
            RevealFrom::Scale => "reveal reveal--scale",
        }
    }
}

/// Hidden until it first scrolls into view, then stays revealed.
#[component]
pub fn Reveal(
    #[prop(optional)] from: RevealFrom,
    /// Stagger offset in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let revealed = use_reveal(target);
    let base = format!("{} {class}", from.class());

    view! {
        <div
            node_ref=target
            class=move || {
                if revealed.get() { format!("{base} is-revealed") } else { base.clone() }
            }
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}

/// Same latch as [`Reveal`], exposed for elements that animate their own
/// properties (e.g. skill bars growing to their level).
pub fn use_reveal(target: NodeRef<html::Div>) -> Signal<bool> {
    let visible = use_element_visibility(target);
    let latch = RwSignal::new(RevealLatch::default());

    Effect::new(move |_| {
        let now_visible = visible.get();
        latch.maybe_update(|l| l.observe(now_visible));
    });

    Signal::derive(move || latch.get().is_revealed())
}
