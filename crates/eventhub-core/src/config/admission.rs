//! Booking admission configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tuning for the booking admission engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdmissionConfig {
    /// Maximum time to wait for the per-event admission lock, in milliseconds.
    #[serde(default = "default_lock_timeout")]
    pub lock_timeout_ms: u64,
}

impl AdmissionConfig {
    /// Lock timeout as a [`Duration`].
    pub fn lock_timeout(&self) -> Duration {
        Duration::from_millis(self.lock_timeout_ms)
    }
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        Self {
            lock_timeout_ms: default_lock_timeout(),
        }
    }
}

fn default_lock_timeout() -> u64 {
    5000
}
