//! Reservation repository implementation.

use chrono::NaiveDate;
use sqlx::PgPool;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_core::types::{GuestId, ReservationId, RoomId};
use stayhub_entity::reservation::{CreateReservation, Reservation, StayRange};

/// Exclusion constraint guarding one room against overlapping stays.
const ROOM_OVERLAP_CONSTRAINT: &str = "reservations_room_no_overlap";
/// Exclusion constraint guarding one guest against overlapping stays.
const CLIENT_OVERLAP_CONSTRAINT: &str = "reservations_client_no_overlap";

/// Repository for reservation CRUD and query operations.
#[derive(Debug, Clone)]
pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    /// Create a new reservation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a reservation by ID.
    pub async fn find_by_id(&self, id: ReservationId) -> AppResult<Option<Reservation>> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find reservation", e)
            })
    }

    /// List all reservations held by a guest, newest first.
    pub async fn find_by_client(&self, client_id: GuestId) -> AppResult<Vec<Reservation>> {
        sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations WHERE client_id = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list guest reservations", e)
        })
    }

    /// All stay ranges currently booked for a room.
    pub async fn ranges_for_room(&self, room_id: RoomId) -> AppResult<Vec<StayRange>> {
        sqlx::query_as::<_, StayRange>(
            "SELECT check_in, check_out FROM reservations WHERE room_id = $1",
        )
        .bind(room_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load room ranges", e))
    }

    /// All stay ranges currently held by a guest, across every room.
    pub async fn ranges_for_user(&self, client_id: GuestId) -> AppResult<Vec<StayRange>> {
        sqlx::query_as::<_, StayRange>(
            "SELECT check_in, check_out FROM reservations WHERE client_id = $1",
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load guest ranges", e))
    }

    /// Create a reservation, re-validating availability inside a transaction.
    ///
    /// The room row is locked with `FOR UPDATE`, which serializes concurrent
    /// booking attempts for the same room; both overlap checks then run
    /// against committed state inside the transaction. The GiST exclusion
    /// constraints on the table remain as the final guard and are mapped to
    /// the same typed errors, so a violating insert surfaces as
    /// `RoomUnavailable` / `UserConflict` rather than a database fault.
    pub async fn create(&self, data: &CreateReservation) -> AppResult<Reservation> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let room_row: Option<(RoomId,)> =
            sqlx::query_as("SELECT id FROM rooms WHERE id = $1 FOR UPDATE")
                .bind(data.room_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to lock room row", e)
                })?;

        if room_row.is_none() {
            return Err(AppError::not_found(format!(
                "Room {} not found",
                data.room_id
            )));
        }

        let room_overlaps: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM reservations \
             WHERE room_id = $1 AND check_in < $3 AND check_out > $2",
        )
        .bind(data.room_id)
        .bind(data.range.check_in)
        .bind(data.range.check_out)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check room availability", e)
        })?;

        if room_overlaps > 0 {
            return Err(AppError::room_unavailable(format!(
                "Room {} is already reserved within {}",
                data.room_id, data.range
            )));
        }

        let client_overlaps: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM reservations \
             WHERE client_id = $1 AND check_in < $3 AND check_out > $2",
        )
        .bind(data.client_id)
        .bind(data.range.check_in)
        .bind(data.range.check_out)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check guest conflicts", e)
        })?;

        if client_overlaps > 0 {
            return Err(AppError::user_conflict(format!(
                "Guest {} already holds a reservation within {}",
                data.client_id, data.range
            )));
        }

        let reservation = sqlx::query_as::<_, Reservation>(
            "INSERT INTO reservations (room_id, client_id, check_in, check_out, guest_count) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.room_id)
        .bind(data.client_id)
        .bind(data.range.check_in)
        .bind(data.range.check_out)
        .bind(data.guest_count)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_insert_error)?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit reservation", e)
        })?;

        Ok(reservation)
    }

    /// Delete a reservation by ID. Returns `true` if a row was removed.
    pub async fn delete(&self, id: ReservationId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete reservation", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete reservations whose check-out date is on or before the cutoff.
    ///
    /// Returns the number of rows removed; running the sweep again without
    /// intervening bookings removes nothing.
    pub async fn purge_checked_out_before(&self, cutoff: NaiveDate) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM reservations WHERE check_out <= $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to purge reservations", e)
            })?;

        Ok(result.rows_affected())
    }
}

/// Map an insert failure, translating exclusion-constraint violations into
/// the typed booking outcomes.
fn map_insert_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.code().as_deref() == Some("23P01") {
            return match db_err.constraint() {
                Some(ROOM_OVERLAP_CONSTRAINT) => {
                    AppError::room_unavailable("Room is already reserved for those dates")
                }
                Some(CLIENT_OVERLAP_CONSTRAINT) => {
                    AppError::user_conflict("Guest already holds a reservation for those dates")
                }
                _ => AppError::with_source(ErrorKind::Database, "Exclusion constraint violated", e),
            };
        }
    }
    AppError::with_source(ErrorKind::Database, "Failed to create reservation", e)
}
