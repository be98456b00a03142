use dioxus::prelude::*;

/// Wraps its children with a small contextual popup shown on hover or
/// keyboard focus. Attaching the component is what activates the behavior;
/// the popup itself is pure CSS (see `main.css`).
#[component]
pub fn Tooltip(text: String, children: Element) -> Element {
    rsx! {
        span { class: "tooltip-wrap relative inline-flex", tabindex: "0",
            {children}
            span { class: "tooltip-bubble", role: "tooltip", "{text}" }
        }
    }
}
