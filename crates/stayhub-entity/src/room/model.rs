//! Room entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use stayhub_core::types::RoomId;

/// A bookable hotel room.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Room {
    /// Unique room identifier.
    pub id: RoomId,
    /// Door number, unique across the hotel.
    pub number: i32,
    /// Room type code, if the room has been categorized.
    pub type_code: Option<i16>,
    /// Price per night in integer currency units.
    pub nightly_price: i64,
    /// Maximum number of guests.
    pub capacity: i32,
    /// When the room was added to the catalog.
    pub created_at: DateTime<Utc>,
    /// When the room was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Room {
    /// Total price of a stay of the given number of nights.
    pub fn full_price(&self, nights: i64) -> i64 {
        self.nightly_price * nights
    }

    /// Whether the room can host the requested number of guests.
    pub fn fits(&self, guest_count: i32) -> bool {
        guest_count > 0 && guest_count <= self.capacity
    }
}

/// Data required to add a room to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoom {
    /// Door number, unique across the hotel.
    pub number: i32,
    /// Room type code, if the room has been categorized.
    pub type_code: Option<i16>,
    /// Price per night in integer currency units.
    pub nightly_price: i64,
    /// Maximum number of guests.
    pub capacity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(price: i64, capacity: i32) -> Room {
        Room {
            id: RoomId::new(),
            number: 12,
            type_code: Some(1),
            nightly_price: price,
            capacity,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_full_price() {
        assert_eq!(room(700, 2).full_price(7), 4900);
    }

    #[test]
    fn test_fits_bounds() {
        let r = room(700, 2);
        assert!(r.fits(1));
        assert!(r.fits(2));
        assert!(!r.fits(0));
        assert!(!r.fits(3));
    }
}
