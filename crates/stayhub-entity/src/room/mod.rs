//! Room catalog entities.

pub mod model;
pub mod room_type;
pub mod rule;

pub use model::{CreateRoom, Room};
pub use room_type::RoomType;
pub use rule::HouseRule;
