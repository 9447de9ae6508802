//! Room type entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A category of rooms (standard, suite, ...) sharing a description and
/// house rules.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoomType {
    /// Short numeric code, assigned by the hotel.
    pub code: i16,
    /// Human-readable name.
    pub name: String,
    /// Marketing description shown on room detail pages.
    pub description: String,
    /// When the type was defined.
    pub created_at: DateTime<Utc>,
    /// When the type was last modified.
    pub updated_at: DateTime<Utc>,
}
