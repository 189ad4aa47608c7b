use std::path::Path;

use image::RgbaImage;
use tracing::debug;

use crate::error::{Error, Result};

/// Decode an image from disk and convert it to 8-bit RGBA
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    if !path.is_file() {
        return Err(Error::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let img = image::open(path)?;
    debug!(
        "load_rgba: {:?} decoded as {:?} ({}x{})",
        path,
        img.color(),
        img.width(),
        img.height()
    );
    Ok(img.to_rgba8())
}
