pub mod auth_page;
pub mod dashboard;
pub mod home;
pub mod not_found;

use dioxus::prelude::*;
use std::str::FromStr;

use auth_page::Auth;
use dashboard::Dashboard;
use home::Home;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/auth?:mode")]
    Auth { mode: Option<String> },
    #[route("/dashboard")]
    Dashboard {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Resolve a configured path to a navigation target.
///
/// Paths this app can route stay in the router; anything else (an absolute
/// URL, say) becomes a full page load.
pub fn navigation_target(path: &str) -> NavigationTarget<Route> {
    match Route::from_str(path) {
        Ok(route) => NavigationTarget::Internal(route),
        Err(_) => NavigationTarget::External(path.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_path_stays_internal() {
        assert!(matches!(
            navigation_target("/dashboard"),
            NavigationTarget::Internal(Route::Dashboard {})
        ));
        assert!(matches!(
            navigation_target("/"),
            NavigationTarget::Internal(Route::Home {})
        ));
    }

    #[test]
    fn auth_route_reads_mode_query() {
        let route = Route::from_str("/auth?mode=signup").unwrap();
        assert_eq!(
            route,
            Route::Auth {
                mode: Some("signup".to_string())
            }
        );
    }

    #[test]
    fn route_display_roundtrips_dashboard() {
        assert_eq!(Route::Dashboard {}.to_string(), "/dashboard");
    }
}
