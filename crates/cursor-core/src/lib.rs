pub mod animator;
pub mod appearance;
pub mod config;
pub mod constants;
pub mod interaction;
pub mod magnetic;
pub mod physics;
pub mod scroll_spy;

pub use animator::*;
pub use appearance::*;
pub use config::*;
pub use constants::*;
pub use interaction::*;
pub use magnetic::*;
pub use physics::*;
pub use scroll_spy::*;
