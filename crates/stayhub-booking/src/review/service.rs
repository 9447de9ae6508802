//! Review publication and derived ratings.

use std::sync::Arc;

use tracing::info;

use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;
use stayhub_core::types::{ReservationId, RoomId};
use stayhub_database::repositories::{ReservationRepository, ReviewRepository};
use stayhub_entity::review::{is_valid_rating, CreateReview, Review, MAX_RATING, MIN_RATING};

use crate::context::RequestContext;

/// Room rating derived from a review average.
///
/// Ratings are never cached on the room; they are recomputed from the
/// review rows on demand. An unreviewed room presents as 5.0, and averages
/// are rounded to one decimal place for display.
pub fn derived_rating(average: Option<f64>) -> f64 {
    match average {
        Some(avg) => (avg * 10.0).round() / 10.0,
        None => 5.0,
    }
}

/// Publishes reviews and answers rating queries.
#[derive(Debug, Clone)]
pub struct ReviewService {
    /// Review repository.
    review_repo: Arc<ReviewRepository>,
    /// Reservation repository, for ownership checks.
    reservation_repo: Arc<ReservationRepository>,
}

impl ReviewService {
    /// Creates a new review service.
    pub fn new(
        review_repo: Arc<ReviewRepository>,
        reservation_repo: Arc<ReservationRepository>,
    ) -> Self {
        Self {
            review_repo,
            reservation_repo,
        }
    }

    /// Publish a review for one of the guest's own reservations.
    pub async fn add_review(
        &self,
        ctx: &RequestContext,
        reservation_id: ReservationId,
        rating: i32,
        body: String,
    ) -> AppResult<Review> {
        if !is_valid_rating(rating) {
            return Err(AppError::validation(format!(
                "Rating must be between {MIN_RATING} and {MAX_RATING}"
            )));
        }

        let reservation = self
            .reservation_repo
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Reservation {reservation_id} not found"))
            })?;

        if !reservation.is_owned_by(ctx.guest_id) {
            return Err(AppError::forbidden(
                "Only the reservation holder may review the stay",
            ));
        }

        if self.review_repo.exists_for_reservation(reservation_id).await? {
            return Err(AppError::validation(
                "This reservation has already been reviewed",
            ));
        }

        let review = self
            .review_repo
            .create(&CreateReview {
                room_id: reservation.room_id,
                reservation_id,
                author_id: ctx.guest_id,
                rating,
                body,
            })
            .await?;

        info!(review_id = %review.id, room = %review.room_id, rating, "Review published");
        Ok(review)
    }

    /// Reviews for a room, newest first.
    pub async fn list_for_room(&self, room_id: RoomId) -> AppResult<Vec<Review>> {
        self.review_repo.find_by_room(room_id).await
    }

    /// Derived average rating of a room.
    pub async fn average_for_room(&self, room_id: RoomId) -> AppResult<f64> {
        Ok(derived_rating(self.review_repo.average_rating(room_id).await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreviewed_room_presents_as_five() {
        assert_eq!(derived_rating(None), 5.0);
    }

    #[test]
    fn test_average_rounds_to_one_decimal() {
        assert_eq!(derived_rating(Some(4.666_666)), 4.7);
        assert_eq!(derived_rating(Some(3.04)), 3.0);
    }
}
