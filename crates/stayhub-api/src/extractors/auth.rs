//! `AuthGuest` extractor — reads the authenticated principal injected by
//! the identity proxy and builds the request context.
//!
//! Authentication itself happens upstream; by the time a request reaches
//! this service, the proxy has validated the guest's session and attached
//! `x-guest-id` and `x-guest-email` headers (plus an optional
//! `x-guest-name`). A request missing them is rejected as unauthorized.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use stayhub_booking::RequestContext;
use stayhub_core::error::AppError;
use stayhub_core::types::GuestId;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated guest context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthGuest(pub RequestContext);

impl AuthGuest {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthGuest {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthGuest {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let guest_id: GuestId = header_value(parts, "x-guest-id")?
            .parse()
            .map_err(|_| ApiError(AppError::unauthorized("Malformed x-guest-id header")))?;

        let email = header_value(parts, "x-guest-email")?.to_string();

        let display_name = parts
            .headers
            .get("x-guest-name")
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        Ok(AuthGuest(RequestContext::new(guest_id, email, display_name)))
    }
}

fn header_value<'a>(parts: &'a Parts, name: &str) -> Result<&'a str, ApiError> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError(AppError::unauthorized(format!("Missing {name} header"))))
}
