//! Room catalog and search.

pub mod service;

pub use service::{RoomDetails, RoomService, StayQuote};
