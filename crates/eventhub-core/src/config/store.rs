//! Entity store provider configuration.

use serde::{Deserialize, Serialize};

/// Selects the backend that holds events, attendees, and bookings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store provider type: `"postgres"` or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
        }
    }
}

fn default_provider() -> String {
    "postgres".to_string()
}
