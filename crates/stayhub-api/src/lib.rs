//! # stayhub-api
//!
//! HTTP API layer for StayHub built on Axum. Routes, handlers, DTOs,
//! extractors, and the mapping from domain errors to HTTP responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use state::AppState;
