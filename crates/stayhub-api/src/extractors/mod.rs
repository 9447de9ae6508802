//! Custom Axum extractors.

pub mod auth;
pub mod pagination;

pub use auth::AuthGuest;
pub use pagination::PaginationParams;
