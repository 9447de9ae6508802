//! House rule entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A rule of stay attached to a room type, rendered on room detail pages.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HouseRule {
    /// Unique rule identifier.
    pub id: Uuid,
    /// The room type the rule applies to.
    pub type_code: i16,
    /// The rule text.
    pub rule: String,
}
