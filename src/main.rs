//! StayHub Server — hotel booking service.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use stayhub_core::config::AppConfig;
use stayhub_core::error::AppError;
use stayhub_core::traits::MailSender;

#[tokio::main]
async fn main() {
    let env = std::env::var("STAYHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting StayHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Database connection + migrations ─────────────────────────
    let database = stayhub_database::DatabasePool::connect(&config.database).await?;
    stayhub_database::migration::run_migrations(database.pool()).await?;
    let db_pool = database.into_pool();

    // ── Repositories ─────────────────────────────────────────────
    let room_repo = Arc::new(stayhub_database::repositories::RoomRepository::new(
        db_pool.clone(),
    ));
    let reservation_repo = Arc::new(
        stayhub_database::repositories::ReservationRepository::new(db_pool.clone()),
    );
    let review_repo = Arc::new(stayhub_database::repositories::ReviewRepository::new(
        db_pool.clone(),
    ));

    // ── Mail sender ──────────────────────────────────────────────
    let mailer: Arc<dyn MailSender> = Arc::new(stayhub_mailer::LogMailer::new(config.mail.clone()));

    // ── Services ─────────────────────────────────────────────────
    let reservation_service = Arc::new(stayhub_booking::ReservationService::new(
        Arc::clone(&reservation_repo),
        Arc::clone(&room_repo),
        Arc::clone(&mailer),
        config.mail.clone(),
        config.booking.clone(),
    ));
    let room_service = Arc::new(stayhub_booking::RoomService::new(
        Arc::clone(&room_repo),
        Arc::clone(&reservation_repo),
        Arc::clone(&review_repo),
    ));
    let review_service = Arc::new(stayhub_booking::ReviewService::new(
        Arc::clone(&review_repo),
        Arc::clone(&reservation_repo),
    ));

    tracing::info!("Services initialized");

    // ── Maintenance scheduler ────────────────────────────────────
    let mut scheduler = if config.worker.enabled {
        let scheduler = stayhub_worker::MaintenanceScheduler::new(
            Arc::clone(&reservation_service),
            config.worker.clone(),
        )
        .await?;
        scheduler.register_default_tasks().await?;
        scheduler.start().await?;
        Some(scheduler)
    } else {
        tracing::info!("Maintenance scheduler disabled");
        None
    };

    // ── HTTP server ──────────────────────────────────────────────
    let app_state = stayhub_api::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        mailer: Arc::clone(&mailer),
        room_repo: Arc::clone(&room_repo),
        reservation_repo: Arc::clone(&reservation_repo),
        review_repo: Arc::clone(&review_repo),
        room_service: Arc::clone(&room_service),
        reservation_service: Arc::clone(&reservation_service),
        review_service: Arc::clone(&review_service),
    };

    let app = stayhub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("StayHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    // ── Graceful shutdown of background tasks ────────────────────
    if let Some(scheduler) = scheduler.as_mut() {
        scheduler.shutdown().await?;
    }
    db_pool.close().await;

    tracing::info!("StayHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
