use shared_types::AppConfig;
use std::sync::OnceLock;
use tracing::{info, warn};

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` from the workspace root, baked in at compile time so the
/// web build needs no filesystem.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Parse a config document. Unparseable input falls back to all defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "failed to parse config.toml, using defaults");
            AppConfig::default()
        }
    }
}

/// The loaded configuration. Parsed on first use; later calls are free.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = parse_config(CONFIG_TOML);
        info!(features = ?config.features, auth = ?config.auth, "config loaded");
        config
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::AuthSettings;

    #[test]
    fn garbage_falls_back_to_defaults() {
        assert_eq!(parse_config("[features\nfederated = "), AppConfig::default());
    }

    #[test]
    fn wrong_type_falls_back_to_defaults() {
        let config = parse_config("[auth]\nredirect_delay_ms = \"soon\"");
        assert_eq!(config.auth, AuthSettings::default());
    }

    #[test]
    fn embedded_config_enables_federated() {
        let config = app_config();
        assert!(config.features.federated);
        assert_eq!(config.auth.redirect_path, "/dashboard");
    }
}
