//! Booking policy configuration.

use serde::{Deserialize, Serialize};

/// Tunable booking policy knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Reservations whose check-out date is at least this many days in the
    /// past are removed by the maintenance sweep.
    #[serde(default = "default_purge_after_days")]
    pub purge_after_days: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            purge_after_days: default_purge_after_days(),
        }
    }
}

fn default_purge_after_days() -> u32 {
    180
}
