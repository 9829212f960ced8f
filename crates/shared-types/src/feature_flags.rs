use serde::{Deserialize, Serialize};

use crate::config::AuthSettings;

/// Feature flags controlling which optional parts of the auth screen render.
///
/// Every field defaults to `false` so that a missing or incomplete config
/// file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Show the "with Google" button.
    #[serde(default)]
    pub federated: bool,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub auth: AuthSettings,
}
