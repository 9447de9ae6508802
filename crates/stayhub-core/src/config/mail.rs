//! Outbound mail configuration.

use serde::{Deserialize, Serialize};

/// Settings for the booking/cancellation mail sender.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// Whether outbound mail is enabled at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Sender address placed in the From header.
    #[serde(default = "default_from_address")]
    pub from_address: String,
    /// Display name used when addressing the hotel administration.
    #[serde(default = "default_sender_name")]
    pub sender_name: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            from_address: default_from_address(),
            sender_name: default_sender_name(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_from_address() -> String {
    "reservations@stayhub.example".to_string()
}

fn default_sender_name() -> String {
    "Hotel Administration".to_string()
}
