//! The brain surface: a displaced icosahedron, its material, and the
//! wgpu pipeline that shades it.

mod material;
mod mesh;
mod pipeline;
mod types;

pub use material::*;
pub use mesh::*;
pub use pipeline::*;
pub use types::*;
