//! Guest review entities.

pub mod model;

pub use model::{is_valid_rating, CreateReview, Review, MAX_RATING, MIN_RATING};
