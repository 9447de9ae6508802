//! Request context carrying the authenticated guest.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stayhub_core::types::GuestId;

/// Context for the current authenticated request.
///
/// The identity provider in front of the service authenticates the guest;
/// this context carries the resulting principal into service methods so
/// that every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated guest's ID.
    pub guest_id: GuestId,
    /// The guest's email address, used for booking mail.
    pub email: String,
    /// Optional display name for salutations.
    pub display_name: Option<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(guest_id: GuestId, email: String, display_name: Option<String>) -> Self {
        Self {
            guest_id,
            email,
            display_name,
            request_time: Utc::now(),
        }
    }

    /// Name used to address the guest in messages.
    pub fn salutation_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}
