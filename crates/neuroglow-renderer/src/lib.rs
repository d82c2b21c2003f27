//! Rendering and animation for the Neuroglow brain background.
//!
//! The scene model (`brain`, `particles`, `synapses`, `camera`, `lights`,
//! `animation`) is plain data and needs no GPU. `render_state` and the
//! per-module pipelines upload it through wgpu.

pub mod animation;
pub mod background;
pub mod brain;
pub mod camera;
pub mod gpu;
pub mod lights;
pub mod math;
pub mod particles;
pub mod render_state;
pub mod scene;
pub mod synapses;

pub use animation::{AnimationState, BrainAnimator, FrameOutcome, LoopState};
pub use background::BrainBackground;
pub use gpu::{GpuContext, GpuOptions, PhysicalSize, RendererError};
pub use render_state::RenderState;
pub use scene::BrainScene;
