//! Reservation entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use stayhub_core::types::{GuestId, ReservationId, RoomId};

use super::range::StayRange;

/// A confirmed room reservation.
///
/// Created only after both the availability and user-conflict checks pass;
/// destroyed through the cancellation path or the old-reservation purge.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    /// Unique reservation identifier.
    pub id: ReservationId,
    /// The reserved room.
    pub room_id: RoomId,
    /// The guest holding the reservation.
    pub client_id: GuestId,
    /// Arrival date.
    pub check_in: NaiveDate,
    /// Departure date.
    pub check_out: NaiveDate,
    /// Number of guests staying.
    pub guest_count: i32,
    /// When the reservation was registered.
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// The stay interval of this reservation.
    ///
    /// Stored rows satisfy `check_in < check_out` (enforced on insert and by
    /// a database check constraint), so no re-validation happens here.
    pub fn range(&self) -> StayRange {
        StayRange {
            check_in: self.check_in,
            check_out: self.check_out,
        }
    }

    /// Whether the requesting guest owns this reservation.
    pub fn is_owned_by(&self, guest: GuestId) -> bool {
        self.client_id == guest
    }
}

/// Data required to create a new reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReservation {
    /// The room to reserve.
    pub room_id: RoomId,
    /// The guest making the reservation.
    pub client_id: GuestId,
    /// The requested stay interval.
    pub range: StayRange,
    /// Number of guests staying.
    pub guest_count: i32,
}
