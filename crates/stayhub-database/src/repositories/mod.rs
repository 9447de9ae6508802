//! Repository implementations, one per entity.

pub mod reservation;
pub mod review;
pub mod room;

pub use reservation::ReservationRepository;
pub use review::ReviewRepository;
pub use room::RoomRepository;
