//! Room catalog, detail, and free-room search.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;
use stayhub_core::types::pagination::{PageRequest, PageResponse};
use stayhub_database::repositories::{ReservationRepository, ReviewRepository, RoomRepository};
use stayhub_entity::reservation::StayRange;
use stayhub_entity::review::Review;
use stayhub_entity::room::{HouseRule, Room, RoomType};

use crate::availability::is_available;
use crate::review::service::derived_rating;

/// Everything the room detail page shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDetails {
    /// The room itself.
    pub room: Room,
    /// Its type, if categorized.
    pub room_type: Option<RoomType>,
    /// House rules for the room's type.
    pub rules: Vec<HouseRule>,
    /// Reviews, newest first.
    pub reviews: Vec<Review>,
    /// Average rating derived from the reviews (5.0 when unreviewed).
    pub average_rating: f64,
}

/// Price quote for a prospective stay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StayQuote {
    /// The quoted room's door number.
    pub room_number: i32,
    /// Number of nights.
    pub nights: i64,
    /// Price per night in integer currency units.
    pub nightly_price: i64,
    /// Total price of the stay.
    pub total: i64,
}

/// Read-side service for the room catalog.
#[derive(Debug, Clone)]
pub struct RoomService {
    /// Room repository.
    room_repo: Arc<RoomRepository>,
    /// Reservation repository, for availability filtering.
    reservation_repo: Arc<ReservationRepository>,
    /// Review repository, for derived ratings.
    review_repo: Arc<ReviewRepository>,
}

impl RoomService {
    /// Creates a new room service.
    pub fn new(
        room_repo: Arc<RoomRepository>,
        reservation_repo: Arc<ReservationRepository>,
        review_repo: Arc<ReviewRepository>,
    ) -> Self {
        Self {
            room_repo,
            reservation_repo,
            review_repo,
        }
    }

    /// Paginated room catalog, ordered by door number.
    pub async fn list(&self, page: PageRequest) -> AppResult<PageResponse<Room>> {
        self.room_repo.find_all(&page).await
    }

    /// Room detail by door number: type, rules, reviews, derived rating.
    pub async fn details(&self, number: i32) -> AppResult<RoomDetails> {
        let room = self.find_by_number(number).await?;

        let (room_type, rules) = match room.type_code {
            Some(code) => (
                self.room_repo.find_type(code).await?,
                self.room_repo.rules_for_type(code).await?,
            ),
            None => (None, Vec::new()),
        };

        let reviews = self.review_repo.find_by_room(room.id).await?;
        let average_rating = derived_rating(self.review_repo.average_rating(room.id).await?);

        Ok(RoomDetails {
            room,
            room_type,
            rules,
            reviews,
            average_rating,
        })
    }

    /// Rooms able to host the party that are free for the whole range.
    ///
    /// Candidates come from a capacity filter; each candidate's reservations
    /// are then checked against the requested range.
    pub async fn search_free(&self, range: StayRange, guest_count: i32) -> AppResult<Vec<Room>> {
        if guest_count <= 0 {
            return Err(AppError::invalid_guest_count(
                "At least one guest must stay",
            ));
        }

        let candidates = self.room_repo.find_with_capacity(guest_count).await?;
        let mut free = Vec::with_capacity(candidates.len());

        for room in candidates {
            let ranges = self.reservation_repo.ranges_for_room(room.id).await?;
            if is_available(&range, &ranges) {
                free.push(room);
            }
        }
        Ok(free)
    }

    /// Price quote for staying in a room over the given range.
    pub async fn stay_quote(&self, number: i32, range: StayRange) -> AppResult<StayQuote> {
        let room = self.find_by_number(number).await?;
        let nights = range.nights();

        Ok(StayQuote {
            room_number: room.number,
            nights,
            nightly_price: room.nightly_price,
            total: room.full_price(nights),
        })
    }

    async fn find_by_number(&self, number: i32) -> AppResult<Room> {
        self.room_repo
            .find_by_number(number)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Room {number} not found")))
    }
}
