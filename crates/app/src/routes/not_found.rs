use dioxus::prelude::*;

use crate::routes::Route;

/// 404 page with a way back to the landing route.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        div { class: "page page-centered",
            div { class: "page-code", "404" }
            h1 { class: "page-title", "Page Not Found" }
            p { class: "page-message",
                "Nothing lives at "
                code { "{path}" }
                "."
            }
            Link { to: Route::Home {}, class: "page-link", "Back to Memory Lane" }
        }
    }
}
