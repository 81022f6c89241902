pub mod errors;
pub mod ids;
pub mod keys;
pub mod media;
pub mod mock;
pub mod protocol;
pub mod speed;

pub use errors::SpeedError;
pub use ids::MediaId;
pub use speed::{clamp_speed, DEFAULT_SPEED, MAX_SPEED, MIN_SPEED, SPEED_STEP};
