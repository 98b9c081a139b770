//! Core rendering functions
//! Canvas ownership, painter's-algorithm face ordering and the render loop

use super::error::{RenderError, Result};
use super::math::Vec2;
use super::shade::shade_triangle;
use super::types::{Color, Face, RenderConfig, ShadeMode};

/// Canvas for software rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pub pixels: Vec<Color>, // Row-major, one color per pixel
    pub width: usize,
    pub height: usize,
}

impl Canvas {
    /// # Panics
    ///
    /// Panics if the pixel buffer cannot be allocated; see [`Canvas::checked_len`].
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        Self {
            pixels: vec![background; width.saturating_mul(height)],
            width,
            height,
        }
    }

    /// Pixel count of a `width` x `height` canvas, or `None` when the
    /// buffer would exceed the largest possible allocation
    pub fn checked_len(width: usize, height: usize) -> Option<usize> {
        let len = width.checked_mul(height)?;
        let bytes = len.checked_mul(std::mem::size_of::<Color>())?;
        (bytes <= isize::MAX as usize).then_some(len)
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.width, config.height, config.background)
    }

    /// Write a pixel; coordinates outside the canvas are ignored
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    pub fn row(&self, y: usize) -> &[Color] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }
}

/// Mean depth of a face's three vertices
fn face_depth(face: &Face, depth: &[f64]) -> f64 {
    (depth[face.v0] + depth[face.v1] + depth[face.v2]) / 3.0
}

/// Check that every face index is in range for all vertex-aligned arrays
pub fn validate_faces(faces: &[Face], arrays: &[(&'static str, usize)]) -> Result<()> {
    for (face_idx, face) in faces.iter().enumerate() {
        for index in face.indices() {
            for &(array, len) in arrays {
                if index >= len {
                    return Err(RenderError::InvalidFaceIndex {
                        face: face_idx,
                        index,
                        array,
                        len,
                    });
                }
            }
        }
    }
    Ok(())
}

/// Order faces back-to-front by mean vertex depth (farthest first)
///
/// The sort is stable: faces with equal depth keep their input order, so
/// the painting order never depends on the sort implementation.
pub fn sort_faces(faces: &[Face], depth: &[f64]) -> Result<Vec<Face>> {
    validate_faces(faces, &[("depth", depth.len())])?;

    let mut keyed: Vec<(f64, Face)> = faces
        .iter()
        .map(|face| (face_depth(face, depth), *face))
        .collect();

    keyed.sort_by(|a, b| b.0.total_cmp(&a.0));

    Ok(keyed.into_iter().map(|(_, face)| face).collect())
}

/// Render driver: paints faces back-to-front onto a fresh canvas
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render a mesh given as parallel arrays
    ///
    /// Every face is validated before the first pixel is written; one bad
    /// index fails the whole call.
    pub fn render(
        &self,
        verts2d: &[Vec2],
        faces: &[Face],
        vcolors: &[Color],
        depth: &[f64],
        mode: ShadeMode,
    ) -> Result<Canvas> {
        validate_faces(
            faces,
            &[
                ("verts2d", verts2d.len()),
                ("vcolors", vcolors.len()),
                ("depth", depth.len()),
            ],
        )?;

        let (width, height) = (self.config.width, self.config.height);
        if Canvas::checked_len(width, height).is_none() {
            return Err(RenderError::InvalidCanvasSize { width, height });
        }
        let mut canvas = Canvas::from_config(&self.config);

        log::debug!(
            "rendering {} faces ({} shading) onto {}x{} canvas",
            faces.len(),
            mode,
            canvas.width,
            canvas.height
        );

        for face in sort_faces(faces, depth)? {
            let verts = face.indices().map(|i| verts2d[i]);
            let colors = face.indices().map(|i| vcolors[i]);
            shade_triangle(&mut canvas, &verts, &colors, mode);
        }

        Ok(canvas)
    }

    /// Same as [`render`](Self::render), with the shade mode given by name
    pub fn render_named(
        &self,
        verts2d: &[Vec2],
        faces: &[Face],
        vcolors: &[Color],
        depth: &[f64],
        mode: &str,
    ) -> Result<Canvas> {
        let mode: ShadeMode = mode.parse()?;
        self.render(verts2d, faces, vcolors, depth, mode)
    }
}
