//! Mesh loading and saving
//!
//! Uses RON (Rusty Object Notation) for human-readable mesh files.

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::Mesh;

/// Error type for mesh loading
#[derive(Error, Debug)]
pub enum MeshError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),

    #[error("{what} has {found} entries, expected {expected} (one per vertex)")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Load a mesh from a RON file
pub fn load_mesh<P: AsRef<Path>>(path: P) -> Result<Mesh, MeshError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let mesh = load_mesh_from_str(&contents)?;
    log::debug!(
        "loaded mesh {}: {} vertices, {} faces",
        path.display(),
        mesh.vertex_count(),
        mesh.face_count()
    );
    Ok(mesh)
}

/// Save a mesh to a RON file
pub fn save_mesh<P: AsRef<Path>>(mesh: &Mesh, path: P) -> Result<(), MeshError> {
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(3)
        .indentor("  ".to_string());

    let contents = ron::ser::to_string_pretty(mesh, config)?;
    fs::write(path, contents)?;
    Ok(())
}

/// Load a mesh from a RON string (for embedded meshes or testing)
pub fn load_mesh_from_str(s: &str) -> Result<Mesh, MeshError> {
    let mesh: Mesh = ron::from_str(s)?;
    mesh.validate()?;
    Ok(mesh)
}
