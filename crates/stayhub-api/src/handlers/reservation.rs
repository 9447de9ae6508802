//! Reservation lifecycle handlers.

use axum::Json;
use axum::extract::{Path, State};
use chrono::Utc;
use validator::Validate;

use stayhub_core::error::AppError;
use stayhub_core::types::ReservationId;
use stayhub_entity::reservation::Reservation;

use crate::dto::request::CreateReservationRequest;
use crate::dto::response::{ApiResponse, RefundQuoteResponse};
use crate::error::ApiError;
use crate::extractors::AuthGuest;
use crate::state::AppState;

/// POST /api/reservations
pub async fn create_reservation(
    State(state): State<AppState>,
    auth: AuthGuest,
    Json(req): Json<CreateReservationRequest>,
) -> Result<Json<ApiResponse<Reservation>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::invalid_guest_count(e.to_string()))?;
    let range = req.range()?;

    let reservation = state
        .reservation_service
        .create(
            auth.context(),
            req.room_id,
            range,
            req.guest_count,
            Utc::now().date_naive(),
        )
        .await?;

    Ok(Json(ApiResponse::ok(reservation)))
}

/// GET /api/reservations
pub async fn list_my_reservations(
    State(state): State<AppState>,
    auth: AuthGuest,
) -> Result<Json<ApiResponse<Vec<Reservation>>>, ApiError> {
    let reservations = state
        .reservation_service
        .list_for_guest(auth.context())
        .await?;
    Ok(Json(ApiResponse::ok(reservations)))
}

/// GET /api/reservations/{id}/refund
pub async fn refund_quote(
    State(state): State<AppState>,
    auth: AuthGuest,
    Path(id): Path<ReservationId>,
) -> Result<Json<ApiResponse<RefundQuoteResponse>>, ApiError> {
    let (reservation, quote) = state
        .reservation_service
        .cancel_quote(auth.context(), id, Utc::now().date_naive())
        .await?;

    Ok(Json(ApiResponse::ok(RefundQuoteResponse::from_quote(
        quote,
        &reservation,
    ))))
}

/// DELETE /api/reservations/{id}
pub async fn cancel_reservation(
    State(state): State<AppState>,
    auth: AuthGuest,
    Path(id): Path<ReservationId>,
) -> Result<Json<ApiResponse<RefundQuoteResponse>>, ApiError> {
    let (reservation, quote) = state
        .reservation_service
        .cancel(auth.context(), id, Utc::now().date_naive())
        .await?;

    Ok(Json(ApiResponse::ok(RefundQuoteResponse::from_quote(
        quote,
        &reservation,
    ))))
}
