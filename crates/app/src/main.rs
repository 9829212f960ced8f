use dioxus::prelude::*;
use std::rc::Rc;

mod auth;
mod config;
mod routes;
mod timer;
use auth::{BackendHandle, SimulatedBackend};
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!(platform = client_platform(), "starting Memory Lane");
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    let app_config = config::app_config();

    use_context_provider(|| app_config.features.clone());
    use_context_provider(|| app_config.auth.clone());

    // Swap this for an HTTP-backed implementation to talk to a real identity service.
    use_context_provider(|| {
        BackendHandle(Rc::new(SimulatedBackend::from_settings(&app_config.auth)))
    });

    rsx! {
        document::Title { "Memory Lane" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
