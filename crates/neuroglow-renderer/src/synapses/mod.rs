//! Synapse connector lines between particles.

mod connections;
mod pipeline;
mod types;

pub use connections::*;
pub use pipeline::*;
pub use types::*;
