//! Neuron particle cloud: generation and the point-sprite pipeline.

mod cloud;
mod pipeline;
mod types;

pub use cloud::*;
pub use pipeline::*;
pub use types::*;
