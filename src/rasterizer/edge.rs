//! Active edge scanner
//!
//! Tracks which of a triangle's three edges cross the current scanline and
//! where. Edge k runs from vertex k to vertex (k + 1) % 3.
//!
//! Rows are whole scanlines: an edge covers rows `floor(y_min)..=floor(y_max)`,
//! joins the active set on its first row and leaves it after its last.

use super::math::Vec2;

/// How an edge's x changes from one scanline to the next
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gradient {
    /// dx == 0: x never changes
    Vertical,
    /// dy == 0: the edge lives on a single scanline
    Horizontal,
    /// x moves by `dx_dy` per scanline (the inverse of dy/dx)
    Sloped { dx_dy: f64 },
}

/// Whether an edge crosses the current scanline
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EdgeState {
    #[default]
    Inactive,
    /// Marginal point: where the edge meets the scanline
    Active { x: f64 },
}

/// One triangle side
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    /// Vertex index the edge starts at
    pub start: usize,
    /// Vertex index the edge ends at
    pub end: usize,
    pub y_min: f64,
    pub y_max: f64,
    pub gradient: Gradient,
    pub state: EdgeState,
    /// x where the edge enters its first row
    entry_x: f64,
    /// Horizontal extent of the edge; marginal points never leave it
    x_min: f64,
    x_max: f64,
}

impl Edge {
    fn new(k: usize, verts: &[Vec2; 3]) -> Self {
        let start = k;
        let end = (k + 1) % 3;
        let a = verts[start];
        let b = verts[end];
        let d = b - a;

        let gradient = if d.x == 0.0 {
            Gradient::Vertical
        } else if d.y == 0.0 {
            Gradient::Horizontal
        } else {
            Gradient::Sloped { dx_dy: d.x / d.y }
        };

        // Enter at the upper endpoint; a flat edge enters at its left end
        let entry_x = if a.y < b.y {
            a.x
        } else if b.y < a.y {
            b.x
        } else {
            a.x.min(b.x)
        };

        Self {
            start,
            end,
            y_min: a.y.min(b.y),
            y_max: a.y.max(b.y),
            gradient,
            state: EdgeState::Inactive,
            entry_x,
            x_min: a.x.min(b.x),
            x_max: a.x.max(b.x),
        }
    }

    pub fn first_row(&self) -> i64 {
        self.y_min.floor() as i64
    }

    pub fn last_row(&self) -> i64 {
        self.y_max.floor() as i64
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, EdgeState::Active { .. })
    }

    /// Current marginal point, if the edge is active
    pub fn marginal_x(&self) -> Option<f64> {
        match self.state {
            EdgeState::Active { x } => Some(x),
            EdgeState::Inactive => None,
        }
    }

    fn activate(&mut self) {
        self.state = EdgeState::Active { x: self.entry_x };
    }

    fn deactivate(&mut self) {
        self.state = EdgeState::Inactive;
    }

    /// Hold `x` within the edge's horizontal extent
    fn hold_x(&self, x: f64) -> f64 {
        x.max(self.x_min).min(self.x_max)
    }

    /// Marginal point on `row`, computed directly from the entry point
    fn x_at_row(&self, row: i64) -> f64 {
        match self.gradient {
            Gradient::Sloped { dx_dy } => {
                // In f64: `first_row` saturates for edges beyond the i64 range
                let rows = row as f64 - self.y_min.floor();
                self.hold_x(self.entry_x + dx_dy * rows)
            }
            Gradient::Vertical | Gradient::Horizontal => self.entry_x,
        }
    }

    fn advance(&mut self) {
        if let (EdgeState::Active { x }, Gradient::Sloped { dx_dy }) = (self.state, self.gradient) {
            // An edge shorter than a row would otherwise overshoot its far endpoint
            let x = self.hold_x(x + dx_dy);
            self.state = EdgeState::Active { x };
        }
    }
}

/// Horizontal extent of the current scanline inside the triangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub x_start: f64,
    pub x_end: f64,
    /// Edge supplying `x_start`
    pub start_edge: usize,
    /// Edge supplying `x_end`
    pub end_edge: usize,
}

/// Active edge table for one triangle
#[derive(Debug, Clone)]
pub struct EdgeScanner {
    edges: [Edge; 3],
    first_row: i64,
    last_row: i64,
}

impl EdgeScanner {
    /// Build the three edges and activate those starting on the first row
    pub fn new(verts: &[Vec2; 3]) -> Self {
        let mut edges = [
            Edge::new(0, verts),
            Edge::new(1, verts),
            Edge::new(2, verts),
        ];

        let first_row = edges.iter().map(Edge::first_row).min().unwrap_or(0);
        let last_row = edges.iter().map(Edge::last_row).max().unwrap_or(-1);

        for edge in edges.iter_mut().filter(|e| e.first_row() == first_row) {
            edge.activate();
        }

        Self {
            edges,
            first_row,
            last_row,
        }
    }

    pub fn first_row(&self) -> i64 {
        self.first_row
    }

    pub fn last_row(&self) -> i64 {
        self.last_row
    }

    pub fn edges(&self) -> &[Edge; 3] {
        &self.edges
    }

    pub fn active_count(&self) -> usize {
        self.edges.iter().filter(|e| e.is_active()).count()
    }

    /// Leftmost and rightmost marginal points on the current scanline.
    /// Ties go to the lower edge index. `None` when no edge is active.
    pub fn span(&self) -> Option<Span> {
        let mut span: Option<Span> = None;

        for (k, edge) in self.edges.iter().enumerate() {
            let Some(x) = edge.marginal_x() else {
                continue;
            };
            let mut s = span.unwrap_or(Span {
                x_start: x,
                x_end: x,
                start_edge: k,
                end_edge: k,
            });
            if x < s.x_start {
                s.x_start = x;
                s.start_edge = k;
            }
            if x > s.x_end {
                s.x_end = x;
                s.end_edge = k;
            }
            span = Some(s);
        }

        span
    }

    /// Jump forward to scanline `row` without visiting the rows in between.
    /// Edges covering `row` become active at their marginal point there.
    pub fn seek(&mut self, row: i64) {
        for edge in self.edges.iter_mut() {
            edge.state = if edge.first_row() <= row && row <= edge.last_row() {
                EdgeState::Active { x: edge.x_at_row(row) }
            } else {
                EdgeState::Inactive
            };
        }
    }

    /// Move from scanline `row` to `row + 1`: retire edges ending on `row`,
    /// advance the rest, then pick up edges starting on `row + 1`.
    pub fn step(&mut self, row: i64) {
        for edge in self.edges.iter_mut() {
            if edge.is_active() && edge.last_row() == row {
                edge.deactivate();
            }
        }

        for edge in self.edges.iter_mut() {
            edge.advance();
        }

        for edge in self.edges.iter_mut() {
            if edge.first_row() == row + 1 {
                edge.activate();
            }
        }
    }
}
