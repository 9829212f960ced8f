use dioxus::prelude::*;

use crate::routes::Route;

/// Post-authentication landing page.
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        div { class: "page page-centered",
            h1 { class: "page-title page-title-gradient", "Welcome back" }
            p { class: "page-message", "Your memories will show up here." }
            Link { to: Route::Home {}, class: "page-link", "Home" }
        }
    }
}
