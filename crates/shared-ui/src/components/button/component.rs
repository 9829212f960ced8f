use dioxus::prelude::*;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    /// Light pill on the dark page, used for the email submit.
    #[default]
    Primary,
    /// Dark pill, used for the federated sign-in.
    Secondary,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
        }
    }
}

/// HTML `type` of a button.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonKind {
    #[default]
    Button,
    Submit,
}

impl ButtonKind {
    fn as_str(&self) -> &'static str {
        match self {
            ButtonKind::Button => "button",
            ButtonKind::Submit => "submit",
        }
    }
}

/// A pill-shaped button. Disabled buttons are dimmed and ignore clicks.
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub kind: ButtonKind,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default = false)]
    pub full_width: bool,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let mut base = vec![
        Attribute::new("class", "button", None, false),
        Attribute::new("data-style", props.variant.class(), None, false),
    ];
    if props.full_width {
        base.push(Attribute::new("data-width", "full", None, false));
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);
    let disabled = props.disabled;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: props.kind.as_str(),
            disabled: disabled,
            "aria-disabled": "{disabled}",
            onclick: move |evt| {
                if disabled {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {props.children}
        }
    }
}
