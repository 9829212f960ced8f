use dioxus::prelude::*;
use dioxus_primitives::separator as prim;

/// A horizontal rule with an optional caption centered on it,
/// e.g. "Or continue with" between two groups of sign-in options.
#[component]
pub fn Divider(#[props(default)] label: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "divider",
            prim::Separator { class: "divider-line", horizontal: true }
            if !label.is_empty() {
                span { class: "divider-label", "{label}" }
                prim::Separator { class: "divider-line", horizontal: true }
            }
        }
    }
}
