//! Cron scheduler for periodic maintenance tasks.

use std::sync::Arc;

use chrono::Utc;
use tokio_cron_scheduler::{Job as CronJob, JobScheduler};
use tracing;

use stayhub_booking::ReservationService;
use stayhub_core::config::worker::WorkerConfig;
use stayhub_core::error::AppError;

/// Cron-based scheduler for periodic background tasks.
pub struct MaintenanceScheduler {
    /// The underlying job scheduler.
    scheduler: JobScheduler,
    /// Reservation service for the purge sweep.
    reservations: Arc<ReservationService>,
    /// Worker settings.
    config: WorkerConfig,
}

impl std::fmt::Debug for MaintenanceScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaintenanceScheduler").finish()
    }
}

impl MaintenanceScheduler {
    /// Create a new maintenance scheduler.
    pub async fn new(
        reservations: Arc<ReservationService>,
        config: WorkerConfig,
    ) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {e}")))?;

        Ok(Self {
            scheduler,
            reservations,
            config,
        })
    }

    /// Register all default scheduled tasks.
    pub async fn register_default_tasks(&self) -> Result<(), AppError> {
        self.register_reservation_purge().await?;

        tracing::info!("All scheduled tasks registered");
        Ok(())
    }

    /// Start the scheduler.
    pub async fn start(&self) -> Result<(), AppError> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {e}")))?;

        tracing::info!("Maintenance scheduler started");
        Ok(())
    }

    /// Shutdown the scheduler.
    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {e}")))?;

        tracing::info!("Maintenance scheduler shut down");
        Ok(())
    }

    /// Old-reservation purge — daily by default.
    ///
    /// Deleting an already-purged set of rows is a no-op, so an overlapping
    /// or repeated run is harmless.
    async fn register_reservation_purge(&self) -> Result<(), AppError> {
        let reservations = Arc::clone(&self.reservations);
        let schedule = self.config.purge_schedule.clone();

        let job = CronJob::new_async(schedule.as_str(), move |_uuid, _lock| {
            let reservations = Arc::clone(&reservations);
            Box::pin(async move {
                let today = Utc::now().date_naive();
                match reservations.purge_expired(today).await {
                    Ok(removed) => {
                        tracing::debug!(removed, "Reservation purge sweep finished");
                    }
                    Err(e) => {
                        tracing::error!("Reservation purge sweep failed: {e}");
                    }
                }
            })
        })
        .map_err(|e| {
            AppError::internal(format!("Failed to create reservation_purge schedule: {e}"))
        })?;

        self.scheduler.add(job).await.map_err(|e| {
            AppError::internal(format!("Failed to add reservation_purge schedule: {e}"))
        })?;

        tracing::info!(schedule = %self.config.purge_schedule, "Registered: reservation_purge");
        Ok(())
    }
}
