//! # stayhub-worker
//!
//! Scheduled maintenance for StayHub. Currently a single sweep: removing
//! reservations whose stay ended beyond the retention window.

pub mod scheduler;

pub use scheduler::MaintenanceScheduler;
