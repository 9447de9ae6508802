//! Room repository implementation.

use sqlx::PgPool;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_core::types::RoomId;
use stayhub_core::types::pagination::{PageRequest, PageResponse};
use stayhub_entity::room::{CreateRoom, HouseRule, Room, RoomType};

/// Repository for room catalog queries.
#[derive(Debug, Clone)]
pub struct RoomRepository {
    pool: PgPool,
}

impl RoomRepository {
    /// Create a new room repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a room by ID.
    pub async fn find_by_id(&self, id: RoomId) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find room", e))
    }

    /// Find a room by its door number.
    pub async fn find_by_number(&self, number: i32) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE number = $1")
            .bind(number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find room by number", e)
            })
    }

    /// List all rooms with pagination, ordered by door number.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Room>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rooms")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count rooms", e))?;

        let rooms = sqlx::query_as::<_, Room>(
            "SELECT * FROM rooms ORDER BY number ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list rooms", e))?;

        Ok(PageResponse::new(
            rooms,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List rooms that can host at least the given number of guests.
    pub async fn find_with_capacity(&self, min_guests: i32) -> AppResult<Vec<Room>> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE capacity >= $1 ORDER BY number ASC")
            .bind(min_guests)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list rooms by capacity", e)
            })
    }

    /// Add a room to the catalog.
    pub async fn create(&self, data: &CreateRoom) -> AppResult<Room> {
        sqlx::query_as::<_, Room>(
            "INSERT INTO rooms (number, type_code, nightly_price, capacity) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.number)
        .bind(data.type_code)
        .bind(data.nightly_price)
        .bind(data.capacity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create room", e))
    }

    /// Find a room type by code.
    pub async fn find_type(&self, code: i16) -> AppResult<Option<RoomType>> {
        sqlx::query_as::<_, RoomType>("SELECT * FROM room_types WHERE code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find room type", e))
    }

    /// House rules attached to a room type.
    pub async fn rules_for_type(&self, code: i16) -> AppResult<Vec<HouseRule>> {
        sqlx::query_as::<_, HouseRule>(
            "SELECT * FROM house_rules WHERE type_code = $1 ORDER BY id",
        )
        .bind(code)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list house rules", e))
    }
}
