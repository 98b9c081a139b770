//! Scan-line software rasterizer
//!
//! Features:
//! - Active-edge scan conversion, one triangle at a time
//! - Flat and Gouraud shading from per-vertex colors
//! - Painter's algorithm ordered by mean face depth (no z-buffer)
//! - Silent clipping to the canvas bounds

mod edge;
mod error;
mod math;
mod render;
mod shade;
mod types;

pub use edge::*;
pub use error::*;
pub use math::*;
pub use render::*;
pub use shade::*;
pub use types::*;
