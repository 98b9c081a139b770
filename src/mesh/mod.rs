//! Mesh data: screen-space vertices, per-vertex colors and depths, faces
//!
//! Meshes are stored as RON files, see [`io`].

mod io;

pub use io::*;

use serde::{Deserialize, Serialize};

use crate::rasterizer::{Canvas, Color, Face, Renderer, Result as RenderResult, ShadeMode, Vec2};

/// A projected triangle mesh as parallel, vertex-aligned arrays
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Screen-space vertex positions
    pub verts2d: Vec<Vec2>,
    /// Triangles, indexing the vertex-aligned arrays
    pub faces: Vec<Face>,
    /// One color per vertex
    pub vcolors: Vec<Color>,
    /// One depth per vertex; larger is farther away
    pub depth: Vec<f64>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.verts2d.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check that the per-vertex arrays line up with `verts2d`
    pub fn validate(&self) -> Result<(), MeshError> {
        let expected = self.verts2d.len();
        for (what, found) in [("vcolors", self.vcolors.len()), ("depth", self.depth.len())] {
            if found != expected {
                return Err(MeshError::LengthMismatch { what, expected, found });
            }
        }
        Ok(())
    }

    /// Push one vertex with its color and depth, returning its index
    pub fn add_vertex(&mut self, pos: Vec2, color: Color, depth: f64) -> usize {
        self.verts2d.push(pos);
        self.vcolors.push(color);
        self.depth.push(depth);
        self.verts2d.len() - 1
    }

    pub fn add_face(&mut self, v0: usize, v1: usize, v2: usize) {
        self.faces.push(Face::new(v0, v1, v2));
    }

    /// Render this mesh with the given renderer
    pub fn render(&self, renderer: &Renderer, mode: ShadeMode) -> RenderResult<Canvas> {
        renderer.render(&self.verts2d, &self.faces, &self.vcolors, &self.depth, mode)
    }
}

/// Built-in demo mesh: overlapping colored triangles at different depths,
/// laid out for a canvas of `width` x `height`
pub fn demo_mesh(width: usize, height: usize) -> Mesh {
    let mut mesh = Mesh::default();
    let s = Vec2::new(width as f64, height as f64);
    let at = |u: f64, v: f64| Vec2::new((u * s.x).round(), (v * s.y).round());

    // Back: large warm triangle
    let a = mesh.add_vertex(at(0.05, 0.90), Color::RED, 9.0);
    let b = mesh.add_vertex(at(0.50, 0.05), Color::new(1.0, 0.8, 0.0), 9.0);
    let c = mesh.add_vertex(at(0.95, 0.90), Color::new(1.0, 0.4, 0.0), 9.0);
    mesh.add_face(a, b, c);

    // Middle: a quad split in two, sharing vertices
    let d = mesh.add_vertex(at(0.20, 0.30), Color::GREEN, 5.0);
    let e = mesh.add_vertex(at(0.70, 0.25), Color::new(0.0, 0.8, 0.8), 5.0);
    let f = mesh.add_vertex(at(0.75, 0.70), Color::BLUE, 5.0);
    let g = mesh.add_vertex(at(0.25, 0.75), Color::new(0.6, 0.0, 1.0), 5.0);
    mesh.add_face(d, e, f);
    mesh.add_face(d, f, g);

    // Front: small neutral triangle
    let h = mesh.add_vertex(at(0.40, 0.45), Color::WHITE, 1.0);
    let i = mesh.add_vertex(at(0.60, 0.50), Color::new(0.5, 0.5, 0.5), 1.0);
    let j = mesh.add_vertex(at(0.45, 0.65), Color::BLACK, 1.0);
    mesh.add_face(h, i, j);

    mesh
}
