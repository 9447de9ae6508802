//! # stayhub-booking
//!
//! Business logic service layer for StayHub. Each service orchestrates
//! repositories and the mail sender to implement application-level use
//! cases; the availability, conflict, and refund rules themselves are pure
//! functions over data snapshots.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references. Every time-sensitive
//! operation takes the current date as a parameter instead of reading the
//! system clock, so the rules stay deterministic under test.

pub mod availability;
pub mod context;
pub mod refund;
pub mod reservation;
pub mod review;
pub mod room;

pub use availability::{has_conflict, is_available};
pub use context::RequestContext;
pub use refund::RefundQuote;
pub use reservation::ReservationService;
pub use review::ReviewService;
pub use room::{RoomDetails, RoomService, StayQuote};
