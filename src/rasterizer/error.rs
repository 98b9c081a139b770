//! Errors surfaced by the render driver

use thiserror::Error;

/// Error type for rendering
///
/// Every variant is an input error; rendering itself never fails transiently.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("face {face} references vertex {index}, but only {len} {array} entries exist")]
    InvalidFaceIndex {
        face: usize,
        index: usize,
        array: &'static str,
        len: usize,
    },

    #[error("canvas of {width}x{height} pixels is too large to allocate")]
    InvalidCanvasSize { width: usize, height: usize },

    #[error("unknown shade mode {0:?} (expected \"flat\" or \"gouraud\")")]
    InvalidShadeMode(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;
