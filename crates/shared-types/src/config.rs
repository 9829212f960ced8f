use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timing and navigation settings for the auth screen, the `[auth]` table of
/// `config.toml`. Missing keys take the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AuthSettings {
    /// How long the simulated backend takes to answer.
    pub simulated_delay_ms: u64,
    /// Pause between the success banner and navigation.
    pub redirect_delay_ms: u64,
    /// Post-authentication landing path.
    pub redirect_path: String,
    /// Target of the back control.
    pub back_path: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            simulated_delay_ms: 1000,
            redirect_delay_ms: 1500,
            redirect_path: "/dashboard".to_string(),
            back_path: "/".to_string(),
        }
    }
}

impl AuthSettings {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}
