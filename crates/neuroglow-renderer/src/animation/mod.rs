//! Per-frame animation: throttle clock, pause state, and the animator
//! that advances rotations, shader time, glow, and connector opacity.

mod animator;
mod clock;
mod types;

pub use animator::*;
pub use clock::*;
pub use types::*;
