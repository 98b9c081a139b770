//! Render configuration files
//!
//! A config is a RON struct; omitted fields take their defaults:
//!
//! ```ron
//! (width: 512, height: 512, background: (r: 1.0, g: 1.0, b: 1.0))
//! ```

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::rasterizer::{Canvas, RenderConfig};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("canvas must be between 1x1 and {max}x{max} pixels, got {width}x{height}", max = u32::MAX)]
    InvalidSize { width: usize, height: usize },
}

/// Reject canvas sizes that hold no pixel, cannot be allocated, or do not
/// fit the 32-bit dimensions of an image file
pub fn check_config(config: &RenderConfig) -> Result<(), ConfigError> {
    let (width, height) = (config.width, config.height);
    let fits_image = u32::try_from(width).is_ok() && u32::try_from(height).is_ok();
    if width == 0 || height == 0 || !fits_image || Canvas::checked_len(width, height).is_none() {
        return Err(ConfigError::InvalidSize { width, height });
    }
    Ok(())
}

/// Load a render configuration from a RON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RenderConfig, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let config = load_config_from_str(&contents)?;
    log::debug!("loaded config {}: {:?}", path.display(), config);
    Ok(config)
}

pub fn load_config_from_str(s: &str) -> Result<RenderConfig, ConfigError> {
    let config: RenderConfig = ron::from_str(s)?;
    check_config(&config)?;
    Ok(config)
}
