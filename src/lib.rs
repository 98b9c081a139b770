//! Raster Shade: scan-line triangle rasterizer
//!
//! Renders screen-projected triangle meshes with per-vertex colors onto a
//! fixed-size canvas:
//! - Active-edge scan conversion
//! - Flat and Gouraud shading
//! - Painter's algorithm by mean face depth
//!
//! Meshes and render settings are RON files; canvases are written out through
//! the `image` crate.

pub mod config;
pub mod mesh;
pub mod output;
pub mod rasterizer;

pub use config::{load_config, ConfigError};
pub use mesh::{demo_mesh, load_mesh, Mesh, MeshError};
pub use output::{canvas_to_image, save_image, OutputError};
pub use rasterizer::{
    interpolate_color, sort_faces, Canvas, Color, Face, RenderConfig, RenderError, Renderer, ShadeMode, Vec2,
};
