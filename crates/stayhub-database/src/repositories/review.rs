//! Review repository implementation.

use sqlx::PgPool;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_core::types::{ReservationId, RoomId};
use stayhub_entity::review::{CreateReview, Review};

/// Repository for review CRUD and aggregation queries.
#[derive(Debug, Clone)]
pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    /// Create a new review repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Publish a review.
    pub async fn create(&self, data: &CreateReview) -> AppResult<Review> {
        sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (room_id, reservation_id, author_id, rating, body) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.room_id)
        .bind(data.reservation_id)
        .bind(data.author_id)
        .bind(data.rating)
        .bind(&data.body)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create review", e))
    }

    /// List reviews for a room, newest first.
    pub async fn find_by_room(&self, room_id: RoomId) -> AppResult<Vec<Review>> {
        sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE room_id = $1 ORDER BY published_at DESC, id DESC",
        )
        .bind(room_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list reviews", e))
    }

    /// Average rating of a room, derived from its reviews on demand.
    ///
    /// Returns `None` for a room without reviews.
    pub async fn average_rating(&self, room_id: RoomId) -> AppResult<Option<f64>> {
        sqlx::query_scalar::<_, Option<f64>>(
            "SELECT AVG(rating)::float8 FROM reviews WHERE room_id = $1",
        )
        .bind(room_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to average rating", e))
    }

    /// Whether a reservation has already been reviewed.
    pub async fn exists_for_reservation(&self, reservation_id: ReservationId) -> AppResult<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM reviews WHERE reservation_id = $1")
                .bind(reservation_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to check for review", e)
                })?;
        Ok(count > 0)
    }
}
