//! Request DTOs.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use stayhub_core::result::AppResult;
use stayhub_core::types::RoomId;
use stayhub_entity::reservation::StayRange;

/// Query parameters for the free-room search.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchFreeRoomsQuery {
    /// Requested arrival date.
    pub check_in: NaiveDate,
    /// Requested departure date.
    pub check_out: NaiveDate,
    /// Size of the party.
    #[validate(range(min = 1))]
    pub guest_count: i32,
}

impl SearchFreeRoomsQuery {
    /// Validated stay range from the query dates.
    pub fn range(&self) -> AppResult<StayRange> {
        StayRange::new(self.check_in, self.check_out)
    }
}

/// Query parameters for a stay price quote.
#[derive(Debug, Clone, Deserialize)]
pub struct StayQuoteQuery {
    /// Requested arrival date.
    pub check_in: NaiveDate,
    /// Requested departure date.
    pub check_out: NaiveDate,
}

impl StayQuoteQuery {
    /// Validated stay range from the query dates.
    pub fn range(&self) -> AppResult<StayRange> {
        StayRange::new(self.check_in, self.check_out)
    }
}

/// Body of a reservation creation request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReservationRequest {
    /// The room to reserve.
    pub room_id: RoomId,
    /// Requested arrival date.
    pub check_in: NaiveDate,
    /// Requested departure date.
    pub check_out: NaiveDate,
    /// Size of the party.
    #[validate(range(min = 1))]
    pub guest_count: i32,
}

impl CreateReservationRequest {
    /// Validated stay range from the request dates.
    pub fn range(&self) -> AppResult<StayRange> {
        StayRange::new(self.check_in, self.check_out)
    }
}

/// Body of a review submission.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddReviewRequest {
    /// Rating from 1 to 5.
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    /// Free-form review text.
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub body: String,
}
