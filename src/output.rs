//! Image output: quantize a canvas to 8-bit RGB and encode it

use std::path::Path;

use image::{Rgb, RgbImage};
use thiserror::Error;

use crate::rasterizer::Canvas;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("canvas of {width}x{height} pixels cannot be encoded as an image")]
    InvalidSize { width: usize, height: usize },
}

/// Convert a canvas to an 8-bit RGB image, clamping channels to 0-255
///
/// Empty canvases, sides beyond `u32::MAX` and pixel buffers that do not
/// match the dimensions are rejected.
pub fn canvas_to_image(canvas: &Canvas) -> Result<RgbImage, OutputError> {
    let invalid = || OutputError::InvalidSize {
        width: canvas.width,
        height: canvas.height,
    };
    let width = u32::try_from(canvas.width).map_err(|_| invalid())?;
    let height = u32::try_from(canvas.height).map_err(|_| invalid())?;
    if width == 0 || height == 0 || Some(canvas.pixels.len()) != canvas.width.checked_mul(canvas.height) {
        return Err(invalid());
    }

    let mut img = RgbImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let color = canvas.pixels[y as usize * canvas.width + x as usize];
        *pixel = Rgb(color.to_bytes());
    }
    Ok(img)
}

/// Encode a canvas to `path`; the format follows the file extension
pub fn save_image<P: AsRef<Path>>(canvas: &Canvas, path: P) -> Result<(), OutputError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    canvas_to_image(canvas)?.save(path)?;
    log::debug!("wrote {}x{} image to {}", canvas.width, canvas.height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterizer::Color;

    #[test]
    fn test_canvas_to_image_layout() {
        let mut canvas = Canvas::new(3, 2, Color::WHITE);
        canvas.set_pixel(2, 1, Color::new(0.4, 0.2, 0.2));
        canvas.set_pixel(0, 1, Color::new(2.0, -1.0, 0.0));

        let img = canvas_to_image(&canvas).unwrap();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(img.get_pixel(2, 1), &Rgb([102, 51, 51]));
        assert_eq!(img.get_pixel(0, 1), &Rgb([255, 0, 0]));
    }

    #[test]
    fn test_empty_canvas_rejected() {
        let canvas = Canvas::new(0, 4, Color::WHITE);
        assert!(matches!(
            canvas_to_image(&canvas),
            Err(OutputError::InvalidSize { width: 0, height: 4 })
        ));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_oversized_canvas_rejected() {
        // Too wide for an image header; no pixel buffer is ever built
        let canvas = Canvas {
            pixels: Vec::new(),
            width: 1 << 32,
            height: 1,
        };
        assert!(matches!(
            canvas_to_image(&canvas),
            Err(OutputError::InvalidSize { width: 4_294_967_296, height: 1 })
        ));
    }

    #[test]
    fn test_save_png_roundtrip() {
        let mut canvas = Canvas::new(4, 4, Color::BLACK);
        canvas.set_pixel(1, 2, Color::GREEN);
        let path = std::env::temp_dir().join(format!("raster-shade-out-{}.png", std::process::id()));
        save_image(&canvas, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        let _ = std::fs::remove_file(&path);
        assert_eq!(decoded.get_pixel(1, 2), &Rgb([0, 255, 0]));
        assert_eq!(decoded.get_pixel(0, 0), &Rgb([0, 0, 0]));
    }
}
