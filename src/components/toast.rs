use dioxus::prelude::*;
use futures_timer::Delay;

use crate::common::{Toast, ToastStack, TOAST_DURATION};

/// Renders the live toast stack in the bottom-right corner. When no stack
/// has been provided this renders nothing, so views stay usable outside the
/// app shell.
#[component]
pub fn ToastHost() -> Element {
    let Some(stack) = try_consume_context::<Signal<ToastStack>>() else {
        return rsx! {};
    };

    let entries: Vec<Toast> = stack.read().entries().to_vec();

    rsx! {
        div { class: "fixed bottom-5 right-5 z-50 flex flex-col items-end gap-3",
            for toast in entries {
                ToastCard { key: "{toast.id}", toast, stack }
            }
        }
    }
}

#[component]
fn ToastCard(toast: Toast, stack: Signal<ToastStack>) -> Element {
    let id = toast.id;
    let mut stack = stack;

    // Each card schedules its own dismissal once; dismiss() tolerates the
    // close button having removed the entry first.
    use_future(move || async move {
        Delay::new(TOAST_DURATION).await;
        stack.write().dismiss(id);
    });

    rsx! {
        div {
            class: "toast-card {toast.level.background_class()} text-text-primary px-6 py-4 rounded-lg shadow-lg max-w-md",
            role: "alert",
            div { class: "flex items-center",
                span { class: "text-xl mr-2", "{toast.level.icon()}" }
                span { class: "flex-1", "{toast.message}" }
                button {
                    class: "ml-4 text-text-primary opacity-70 hover:opacity-100",
                    aria_label: "Close",
                    onclick: move |_| stack.write().dismiss(id),
                    "×"
                }
            }
        }
    }
}
