pub mod authority;
pub mod keyboard;
pub mod rebinder;
pub mod registry;

pub use authority::SpeedAuthority;
pub use keyboard::{KeyDisposition, KeyboardHandler};
pub use rebinder::MediaRebinder;
pub use registry::MediaRegistry;
