//! Review handlers.

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use stayhub_core::error::AppError;
use stayhub_core::types::ReservationId;
use stayhub_entity::review::Review;

use crate::dto::request::AddReviewRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthGuest;
use crate::state::AppState;

/// POST /api/reservations/{id}/review
pub async fn add_review(
    State(state): State<AppState>,
    auth: AuthGuest,
    Path(id): Path<ReservationId>,
    Json(req): Json<AddReviewRequest>,
) -> Result<Json<ApiResponse<Review>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let review = state
        .review_service
        .add_review(auth.context(), id, req.rating, req.body)
        .await?;

    Ok(Json(ApiResponse::ok(review)))
}
