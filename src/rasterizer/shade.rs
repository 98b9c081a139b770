//! Scan-line triangle shading (flat and Gouraud)

use super::edge::{Edge, EdgeScanner, Span};
use super::math::{interpolate_color, Vec2};
use super::render::Canvas;
use super::types::{Color, ShadeMode};

/// Inclusive pixel columns covered by a span, clipped to the canvas.
/// Marginal points round half-to-even onto pixel columns.
fn pixel_columns(span: &Span, width: usize) -> Option<(usize, usize)> {
    if width == 0 {
        return None;
    }
    let first = span.x_start.round_ties_even().max(0.0);
    let last = span.x_end.round_ties_even().min((width - 1) as f64);
    if first > last {
        return None;
    }
    Some((first as usize, last as usize))
}

/// Color where an edge meets scanline `y`, blended from its endpoints.
/// `y` is held to the edge's own extent so colors never extrapolate.
fn edge_color(verts: &[Vec2; 3], colors: &[Color; 3], edge: &Edge, y: f64) -> Color {
    let (start, end) = (edge.start, edge.end);
    let y = y.clamp(edge.y_min, edge.y_max);
    interpolate_color(verts[start].y, verts[end].y, y, colors[start], colors[end])
}

/// Rasterize a single triangle into the canvas
///
/// `colors` is aligned with `verts`. Pixels outside the canvas are skipped.
/// Degenerate triangles draw at most their single scanline.
pub fn shade_triangle(canvas: &mut Canvas, verts: &[Vec2; 3], colors: &[Color; 3], mode: ShadeMode) {
    if verts.iter().any(|v| !v.x.is_finite() || !v.y.is_finite()) {
        log::warn!("skipping triangle with non-finite vertex: {:?}", verts);
        return;
    }

    let mut scanner = EdgeScanner::new(verts);

    // Only rows inside the canvas are visited; rows above it are skipped in one jump
    let first_row = scanner.first_row();
    let last_row = scanner.last_row().min(canvas.height as i64 - 1);
    let start_row = first_row.max(0);
    if start_row > last_row {
        return;
    }
    if start_row > first_row {
        scanner.seek(start_row);
    }

    log::trace!(
        "shade {} triangle {:?}, rows {}..={} (area x2 = {})",
        mode,
        verts,
        first_row,
        scanner.last_row(),
        Vec2::orient(verts[0], verts[1], verts[2])
    );

    let flat_color = Color::mean3(colors[0], colors[1], colors[2]);

    for y in start_row..=last_row {
        if let Some(span) = scanner.span() {
            if let Some((x0, x1)) = pixel_columns(&span, canvas.width) {
                let row = y as usize;
                match mode {
                    ShadeMode::Flat => {
                        for x in x0..=x1 {
                            canvas.set_pixel(x, row, flat_color);
                        }
                    }
                    ShadeMode::Gouraud => {
                        let edges = scanner.edges();
                        let color_a = edge_color(verts, colors, &edges[span.start_edge], y as f64);
                        let color_b = edge_color(verts, colors, &edges[span.end_edge], y as f64);

                        for x in x0..=x1 {
                            // Rounded end columns may sit just outside the span
                            let px = (x as f64).clamp(span.x_start, span.x_end);
                            let c = interpolate_color(span.x_start, span.x_end, px, color_a, color_b);
                            canvas.set_pixel(x, row, c);
                        }
                    }
                }
            }
        }

        scanner.step(y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn tri(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> [Vec2; 3] {
        [Vec2::new(a.0, a.1), Vec2::new(b.0, b.1), Vec2::new(c.0, c.1)]
    }

    fn painted(canvas: &Canvas, background: Color) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for y in 0..canvas.height {
            for x in 0..canvas.width {
                if canvas.get_pixel(x, y) != Some(background) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_flat_uses_mean_color() {
        let mut canvas = Canvas::new(16, 16, Color::WHITE);
        let verts = tri((2.0, 2.0), (12.0, 4.0), (5.0, 12.0));
        shade_triangle(&mut canvas, &verts, &[Color::RED, Color::GREEN, Color::BLUE], ShadeMode::Flat);

        let expected = Color::new(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0);
        let covered = painted(&canvas, Color::WHITE);
        assert!(!covered.is_empty());
        for (x, y) in covered {
            assert_eq!(canvas.get_pixel(x, y), Some(expected));
        }
    }

    #[test]
    fn test_gouraud_hits_vertex_colors() {
        let mut canvas = Canvas::new(16, 16, Color::BLACK);
        let verts = tri((1.0, 1.0), (13.0, 1.0), (1.0, 13.0));
        shade_triangle(&mut canvas, &verts, &[Color::RED, Color::GREEN, Color::BLUE], ShadeMode::Gouraud);

        let top_left = canvas.get_pixel(1, 1).unwrap();
        assert_abs_diff_eq!(top_left.r, 1.0, epsilon = 1e-9);
        let top_right = canvas.get_pixel(13, 1).unwrap();
        assert_abs_diff_eq!(top_right.g, 1.0, epsilon = 1e-9);
        let bottom = canvas.get_pixel(1, 13).unwrap();
        assert_abs_diff_eq!(bottom.b, 1.0, epsilon = 1e-9);

        // Halfway down the left edge: red and blue blend evenly
        let mid = canvas.get_pixel(1, 7).unwrap();
        assert_abs_diff_eq!(mid.r, 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(mid.b, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_gouraud_uniform_matches_flat() {
        let c = Color::new(0.3, 0.6, 0.9);
        let verts = tri((0.5, 3.0), (9.0, 0.0), (6.0, 9.0));

        let mut flat = Canvas::new(12, 12, Color::BLACK);
        shade_triangle(&mut flat, &verts, &[c, c, c], ShadeMode::Flat);
        let mut gouraud = Canvas::new(12, 12, Color::BLACK);
        shade_triangle(&mut gouraud, &verts, &[c, c, c], ShadeMode::Gouraud);

        assert_eq!(painted(&flat, Color::BLACK), painted(&gouraud, Color::BLACK));
        for (x, y) in painted(&gouraud, Color::BLACK) {
            let p = gouraud.get_pixel(x, y).unwrap();
            assert_abs_diff_eq!(p.r, c.r, epsilon = 1e-12);
            assert_abs_diff_eq!(p.g, c.g, epsilon = 1e-12);
            assert_abs_diff_eq!(p.b, c.b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_partially_offscreen_is_clipped() {
        let mut canvas = Canvas::new(8, 8, Color::WHITE);
        let verts = tri((-20.0, -5.0), (30.0, 4.0), (-3.0, 40.0));
        shade_triangle(&mut canvas, &verts, &[Color::RED; 3], ShadeMode::Flat);
        assert!(canvas.get_pixel(3, 3) == Some(Color::RED));
    }

    #[test]
    fn test_subpixel_edge_stays_inside_triangle() {
        let verts = tri((0.0, 0.9), (10.0, 1.1), (0.0, 1.1));
        let colors = [Color::RED, Color::GREEN, Color::BLUE];

        for mode in [ShadeMode::Flat, ShadeMode::Gouraud] {
            let mut canvas = Canvas::new(64, 4, Color::WHITE);
            shade_triangle(&mut canvas, &verts, &colors, mode);

            let covered = painted(&canvas, Color::WHITE);
            assert!(covered.contains(&(10, 1)));
            assert!(covered.iter().all(|&(x, _)| x <= 10), "{:?}", covered);

            for (x, y) in covered {
                let p = canvas.get_pixel(x, y).unwrap();
                for ch in [p.r, p.g, p.b] {
                    assert!((-1e-9..=1.0 + 1e-9).contains(&ch), "pixel ({}, {}) = {:?}", x, y, p);
                }
            }
        }
    }

    #[test]
    fn test_fractional_vertices_match_integer_span() {
        // Same shape as an integer triangle, nudged by a quarter pixel in y
        let mut canvas = Canvas::new(12, 12, Color::WHITE);
        let verts = tri((1.0, 7.25), (4.0, 2.25), (7.0, 6.25));
        shade_triangle(&mut canvas, &verts, &[Color::RED; 3], ShadeMode::Flat);

        let covered = painted(&canvas, Color::WHITE);
        assert!(covered.iter().all(|&(x, y)| (1..=7).contains(&x) && (2..=7).contains(&y)));
        assert!(covered.contains(&(4, 2)));
    }

    #[test]
    fn test_far_offscreen_vertex_is_clipped_quickly() {
        let mut canvas = Canvas::new(10, 10, Color::WHITE);
        let verts = tri((0.0, -1e12), (5.0, 5.0), (0.0, 5.0));
        shade_triangle(&mut canvas, &verts, &[Color::RED; 3], ShadeMode::Flat);

        // Above the far vertex the triangle is a sliver from x = 0 to nearly 5
        assert_eq!(canvas.get_pixel(0, 0), Some(Color::RED));
        assert_eq!(canvas.get_pixel(5, 0), Some(Color::RED));
        assert_eq!(canvas.get_pixel(6, 0), Some(Color::WHITE));
        assert_eq!(canvas.get_pixel(0, 6), Some(Color::WHITE));

        // Saturating row numbers must not loop forever either
        let mut canvas = Canvas::new(10, 10, Color::WHITE);
        let verts = tri((0.0, -1e30), (5.0, 5.0), (0.0, 5.0));
        shade_triangle(&mut canvas, &verts, &[Color::RED; 3], ShadeMode::Gouraud);
        assert_eq!(canvas.get_pixel(0, 3), Some(Color::RED));
    }

    #[test]
    fn test_degenerate_triangles_do_not_panic() {
        let mut canvas = Canvas::new(8, 8, Color::WHITE);
        let colors = [Color::RED, Color::GREEN, Color::BLUE];

        // Single point
        shade_triangle(&mut canvas, &tri((3.0, 3.0), (3.0, 3.0), (3.0, 3.0)), &colors, ShadeMode::Gouraud);
        assert_eq!(painted(&canvas, Color::WHITE), vec![(3, 3)]);

        // Collinear on one row: a single scanline
        let mut canvas = Canvas::new(8, 8, Color::WHITE);
        shade_triangle(&mut canvas, &tri((1.0, 5.0), (4.0, 5.0), (6.0, 5.0)), &colors, ShadeMode::Flat);
        let covered = painted(&canvas, Color::WHITE);
        assert_eq!(covered, (1..=6).map(|x| (x, 5)).collect::<Vec<_>>());

        // Collinear diagonal
        let mut canvas = Canvas::new(8, 8, Color::WHITE);
        shade_triangle(&mut canvas, &tri((0.0, 0.0), (2.0, 2.0), (4.0, 4.0)), &colors, ShadeMode::Gouraud);
        assert!(painted(&canvas, Color::WHITE).len() <= 8);

        // Non-finite input is skipped
        let mut canvas = Canvas::new(8, 8, Color::WHITE);
        shade_triangle(&mut canvas, &tri((0.0, f64::NAN), (2.0, 2.0), (4.0, 4.0)), &colors, ShadeMode::Flat);
        assert!(painted(&canvas, Color::WHITE).is_empty());
    }
}
