//! Route definitions for the StayHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes as usize;

    let api_routes = Router::new()
        .merge(room_routes())
        .merge(reservation_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(handlers::health::health_check))
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Room catalog, free-room search, quotes, and reviews.
fn room_routes() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(handlers::room::list_rooms))
        .route("/rooms/free", get(handlers::room::search_free_rooms))
        .route("/rooms/{number}", get(handlers::room::get_room))
        .route("/rooms/{number}/quote", get(handlers::room::quote_stay))
        .route(
            "/rooms/{number}/reviews",
            get(handlers::room::list_room_reviews),
        )
}

/// Reservation lifecycle: create, list, refund quote, cancel, review.
fn reservation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reservations",
            post(handlers::reservation::create_reservation),
        )
        .route(
            "/reservations",
            get(handlers::reservation::list_my_reservations),
        )
        .route(
            "/reservations/{id}/refund",
            get(handlers::reservation::refund_quote),
        )
        .route(
            "/reservations/{id}",
            delete(handlers::reservation::cancel_reservation),
        )
        .route(
            "/reservations/{id}/review",
            post(handlers::review::add_review),
        )
}

/// Health check endpoints (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health/detailed", get(handlers::health::detailed_health))
}

/// Build CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors.max_age(std::time::Duration::from_secs(
        cors_config.max_age_seconds,
    ))
}
