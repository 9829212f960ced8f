use dioxus::prelude::*;

/// Tone of an inline banner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BannerVariant {
    #[default]
    Error,
    Success,
}

impl BannerVariant {
    fn class(&self) -> &'static str {
        match self {
            BannerVariant::Error => "error",
            BannerVariant::Success => "success",
        }
    }

    fn role(&self) -> &'static str {
        match self {
            BannerVariant::Error => "alert",
            BannerVariant::Success => "status",
        }
    }
}

/// Inline message strip shown above a form. Renders nothing for an empty message.
#[component]
pub fn Banner(
    #[props(default)] variant: BannerVariant,
    #[props(into)] message: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    if message.is_empty() {
        return rsx! {};
    }

    let base = vec![
        Attribute::new("class", "banner", None, false),
        Attribute::new("data-variant", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            role: variant.role(),
            ..merged,
            "{message}"
        }
    }
}
