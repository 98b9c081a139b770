//! Core types for the rasterizer

use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::RenderError;

/// RGB color, each channel nominally 0.0-1.0
///
/// Channels are never clamped by the rasterizer; the image writer clamps
/// when it quantizes to bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };
    pub const RED: Color = Color { r: 1.0, g: 0.0, b: 0.0 };
    pub const GREEN: Color = Color { r: 0.0, g: 1.0, b: 0.0 };
    pub const BLUE: Color = Color { r: 0.0, g: 0.0, b: 1.0 };

    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Unweighted per-channel mean of three colors (flat triangle color)
    pub fn mean3(c0: Color, c1: Color, c2: Color) -> Self {
        Self {
            r: (c0.r + c1.r + c2.r) / 3.0,
            g: (c0.g + c1.g + c2.g) / 3.0,
            b: (c0.b + c1.b + c2.b) / 3.0,
        }
    }

    /// Quantize to 8-bit RGB, clamping out-of-range channels
    pub fn to_bytes(self) -> [u8; 3] {
        fn channel(v: f64) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0) as u8
        }
        [channel(self.r), channel(self.g), channel(self.b)]
    }
}

impl Add for Color {
    type Output = Color;
    fn add(self, other: Color) -> Color {
        Color {
            r: self.r + other.r,
            g: self.g + other.g,
            b: self.b + other.b,
        }
    }
}

impl Mul<f64> for Color {
    type Output = Color;
    fn mul(self, s: f64) -> Color {
        Color {
            r: self.r * s,
            g: self.g * s,
            b: self.b * s,
        }
    }
}

/// A triangle face (indices into the vertex-aligned arrays)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    pub v0: usize,
    pub v1: usize,
    pub v2: usize,
}

impl Face {
    pub fn new(v0: usize, v1: usize, v2: usize) -> Self {
        Self { v0, v1, v2 }
    }

    pub fn indices(&self) -> [usize; 3] {
        [self.v0, self.v1, self.v2]
    }
}

/// Shading mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadeMode {
    /// One color per triangle: the mean of its vertex colors
    #[default]
    Flat,
    /// Vertex colors interpolated along edges, then along each scanline
    Gouraud,
}

impl ShadeMode {
    pub fn name(self) -> &'static str {
        match self {
            ShadeMode::Flat => "flat",
            ShadeMode::Gouraud => "gouraud",
        }
    }
}

impl fmt::Display for ShadeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShadeMode {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(ShadeMode::Flat),
            "gouraud" => Ok(ShadeMode::Gouraud),
            _ => Err(RenderError::InvalidShadeMode(s.to_string())),
        }
    }
}

/// Canvas settings, fixed for the lifetime of a [`Renderer`](super::Renderer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Canvas width in pixels
    pub width: usize,
    /// Canvas height in pixels
    pub height: usize,
    /// Color every pixel starts with
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            background: Color::WHITE,
        }
    }
}
