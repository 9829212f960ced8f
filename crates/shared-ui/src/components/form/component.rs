use dioxus::prelude::*;

/// A form wrapper that never performs a native submission.
///
/// `busy` is mirrored to `aria-busy` while a submission is in flight.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(default = false)] busy: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            "novalidate": "true",
            "aria-busy": "{busy}",
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}
