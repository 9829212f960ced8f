use dioxus::prelude::*;
use shared_types::AuthMode;

use crate::routes::Route;

/// Landing route and target of the auth screen's back control.
#[component]
pub fn Home() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        div { class: "page page-centered",
            h1 { class: "page-title page-title-gradient", "Memory Lane" }
            p { class: "page-message", "Keep the moments worth returning to." }
            div { class: "page-actions",
                Link {
                    to: Route::Auth { mode: None },
                    class: "page-link",
                    "Log in"
                }
                Link {
                    to: Route::Auth { mode: Some(AuthMode::SignUp.as_str().to_string()) },
                    class: "page-link page-link-primary",
                    "Sign up"
                }
            }
        }
    }
}
