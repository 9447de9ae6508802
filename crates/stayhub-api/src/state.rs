//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use stayhub_booking::{ReservationService, ReviewService, RoomService};
use stayhub_core::config::AppConfig;
use stayhub_core::traits::MailSender;
use stayhub_database::repositories::{ReservationRepository, ReviewRepository, RoomRepository};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,

    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Outbound mail collaborator.
    pub mailer: Arc<dyn MailSender>,

    /// Room repository.
    pub room_repo: Arc<RoomRepository>,
    /// Reservation repository.
    pub reservation_repo: Arc<ReservationRepository>,
    /// Review repository.
    pub review_repo: Arc<ReviewRepository>,

    /// Room catalog service.
    pub room_service: Arc<RoomService>,
    /// Reservation lifecycle service.
    pub reservation_service: Arc<ReservationService>,
    /// Review service.
    pub review_service: Arc<ReviewService>,
}
