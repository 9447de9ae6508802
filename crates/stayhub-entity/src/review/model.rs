//! Review entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use stayhub_core::types::{GuestId, ReservationId, ReviewId, RoomId};

/// Lowest accepted rating.
pub const MIN_RATING: i32 = 1;
/// Highest accepted rating.
pub const MAX_RATING: i32 = 5;

/// A guest review of a completed stay.
///
/// Each reservation may carry at most one review. The reservation link is
/// nullable so that purging old reservations keeps review history intact.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    /// Unique review identifier.
    pub id: ReviewId,
    /// The reviewed room.
    pub room_id: RoomId,
    /// The reservation the review was written for, if still present.
    pub reservation_id: Option<ReservationId>,
    /// The review author.
    pub author_id: GuestId,
    /// Rating from [`MIN_RATING`] to [`MAX_RATING`].
    pub rating: i32,
    /// Free-form review text.
    pub body: String,
    /// Publication timestamp.
    pub published_at: DateTime<Utc>,
}

/// Whether a rating value is inside the accepted range.
pub fn is_valid_rating(rating: i32) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}

/// Data required to publish a new review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReview {
    /// The reviewed room.
    pub room_id: RoomId,
    /// The reservation being reviewed.
    pub reservation_id: ReservationId,
    /// The review author.
    pub author_id: GuestId,
    /// Rating from [`MIN_RATING`] to [`MAX_RATING`].
    pub rating: i32,
    /// Free-form review text.
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(!is_valid_rating(0));
        assert!(is_valid_rating(1));
        assert!(is_valid_rating(5));
        assert!(!is_valid_rating(6));
    }
}
