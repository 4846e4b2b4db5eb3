//! CLI command implementations

pub mod emboss;
pub mod grayscale;
pub mod invert;
pub mod motion_blur;

use anyhow::{Context, Result};
use pixmap_core::Image;
use std::path::Path;

/// Load a pixel map from a path
pub fn load_image(path: &Path) -> Result<Image> {
    pixmap_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save a pixel map to a path
pub fn save_image(path: &Path, image: &Image) -> Result<()> {
    pixmap_io::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}
