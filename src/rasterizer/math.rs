//! 2D vector math and linear color blending

use std::ops::Sub;
use serde::{Deserialize, Serialize};

use super::types::Color;

/// 2D Vector (screen-space vertex position)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Twice the signed area of the triangle (a, b, c).
    /// Zero means the three points are collinear.
    pub fn orient(a: Vec2, b: Vec2, c: Vec2) -> f64 {
        (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// Blend `c1` and `c2` by where `x` falls between the reference positions
/// `x1` and `x2`. Works the same for x or y coordinates.
///
/// The weight of `c1` is `|x2 - x| / |x2 - x1|`, so the result is exactly `c1`
/// at `x1` and exactly `c2` at `x2`. Coincident references give `c1`.
/// Positions outside `[x1, x2]` extrapolate; nothing is clamped here.
pub fn interpolate_color(x1: f64, x2: f64, x: f64, c1: Color, c2: Color) -> Color {
    let l = if x1 == x2 {
        1.0
    } else {
        (x2 - x).abs() / (x2 - x1).abs()
    };

    c1 * l + c2 * (1.0 - l)
}
