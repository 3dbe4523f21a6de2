use leptos::prelude::*;

use super::{Icon, IconKind};
use crate::state::{ToastId, ToastQueue, TOAST_DURATION};

/// Page-wide handle for transient notifications.
#[derive(Debug, Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
}

impl Toasts {
    /// Shows a toast and schedules its automatic dismissal.
    pub fn notify(&self, title: &'static str, description: &'static str) {
        let Some(id) = self.queue.try_update(|q| q.push(title, description)) else {
            return;
        };

        let queue = self.queue;
        set_timeout(
            move || {
                _ = queue.try_update(|q| q.dismiss(id));
            },
            TOAST_DURATION,
        );
    }

    pub fn dismiss(&self, id: ToastId) {
        self.queue.update(|q| q.dismiss(id));
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts {
        queue: RwSignal::new(ToastQueue::default()),
    };
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

/// Stack of live toasts in the bottom corner.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <ol class="toaster" aria-live="polite">
            <For
                each=move || toasts.queue.get().items().to_vec()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <li class="toast" role="status">
                            <div class="toast__body">
                                <p class="toast__title">{toast.title}</p>
                                <p class="toast__description">{toast.description}</p>
                            </div>
                            <button
                                type="button"
                                class="toast__close"
                                aria-label="Dismiss notification"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                <Icon kind=IconKind::Close />
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}
