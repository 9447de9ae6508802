//! Background worker configuration.

use serde::{Deserialize, Serialize};

/// Settings for the scheduled maintenance worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether the maintenance scheduler runs in this process.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Six-field cron expression for the reservation purge sweep.
    #[serde(default = "default_purge_schedule")]
    pub purge_schedule: String,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            purge_schedule: default_purge_schedule(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_purge_schedule() -> String {
    // Daily at 3 AM
    "0 0 3 * * *".to_string()
}
