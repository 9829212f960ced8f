use dioxus::prelude::*;

/// A rounded text input with an invalid marker.
///
/// When `invalid` is set the input gets `data-invalid="true"` and
/// `aria-invalid="true"`, which the stylesheet paints with a red border.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] autocomplete: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] invalid: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            r#type: "{input_type}",
            value: value,
            placeholder: placeholder,
            autocomplete: autocomplete,
            disabled: disabled,
            "data-invalid": "{invalid}",
            "aria-invalid": "{invalid}",
            oninput: move |evt| on_input.call(evt),
            ..merged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_flag_sets_marker() {
        let html = dioxus_ssr::render_element(rsx! {
            Input { value: "nope", input_type: "email", invalid: true }
        });
        assert!(html.contains(r#"data-invalid="true""#), "{html}");
        assert!(html.contains(r#"aria-invalid="true""#), "{html}");
        assert!(html.contains(r#"type="email""#), "{html}");
    }

    #[test]
    fn valid_input_is_not_marked() {
        let html = dioxus_ssr::render_element(rsx! {
            Input { value: "a@b.co", placeholder: "Email address" }
        });
        assert!(html.contains(r#"data-invalid="false""#), "{html}");
        assert!(html.contains("Email address"), "{html}");
    }
}
