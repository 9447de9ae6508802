//! Room catalog handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use stayhub_core::error::AppError;
use stayhub_entity::review::Review;
use stayhub_entity::room::Room;

use stayhub_booking::{RoomDetails, StayQuote};
use stayhub_core::types::pagination::PageResponse;

use crate::dto::request::{SearchFreeRoomsQuery, StayQuoteQuery};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/rooms
pub async fn list_rooms(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Room>>>, ApiError> {
    let page = state.room_service.list(params.into_page_request()).await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/rooms/free
pub async fn search_free_rooms(
    State(state): State<AppState>,
    Query(query): Query<SearchFreeRoomsQuery>,
) -> Result<Json<ApiResponse<Vec<Room>>>, ApiError> {
    query
        .validate()
        .map_err(|e| AppError::invalid_guest_count(e.to_string()))?;
    let range = query.range()?;

    let rooms = state
        .room_service
        .search_free(range, query.guest_count)
        .await?;
    Ok(Json(ApiResponse::ok(rooms)))
}

/// GET /api/rooms/{number}
pub async fn get_room(
    State(state): State<AppState>,
    Path(number): Path<i32>,
) -> Result<Json<ApiResponse<RoomDetails>>, ApiError> {
    let details = state.room_service.details(number).await?;
    Ok(Json(ApiResponse::ok(details)))
}

/// GET /api/rooms/{number}/quote
pub async fn quote_stay(
    State(state): State<AppState>,
    Path(number): Path<i32>,
    Query(query): Query<StayQuoteQuery>,
) -> Result<Json<ApiResponse<StayQuote>>, ApiError> {
    let range = query.range()?;
    let quote = state.room_service.stay_quote(number, range).await?;
    Ok(Json(ApiResponse::ok(quote)))
}

/// GET /api/rooms/{number}/reviews
pub async fn list_room_reviews(
    State(state): State<AppState>,
    Path(number): Path<i32>,
) -> Result<Json<ApiResponse<Vec<Review>>>, ApiError> {
    let room = state
        .room_repo
        .find_by_number(number)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Room {number} not found")))?;

    let reviews = state.review_service.list_for_room(room.id).await?;
    Ok(Json(ApiResponse::ok(reviews)))
}
