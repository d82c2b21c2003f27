mod color;
mod viewport;

pub use color::*;
pub use viewport::*;
