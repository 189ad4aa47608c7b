use image::RgbaImage;
use image::imageops;
use tracing::info;

use crate::error::{Error, Result};

/// Side of the square icon extracted from a reference sheet.
/// The largest icon sits in the top-left, roughly a third of the width and half the height.
pub fn icon_size(width: u32, height: u32) -> u32 {
    (width / 3).min(height / 2)
}

/// Copy the top-left `icon_size` square out of a multi-size reference sheet
pub fn extract_icon(sheet: &RgbaImage) -> Result<RgbaImage> {
    let (width, height) = sheet.dimensions();
    let size = icon_size(width, height);
    if size == 0 {
        return Err(Error::EmptyCrop { width, height });
    }

    info!("Extracting {}x{} icon from {}x{} sheet", size, size, width, height);
    Ok(imageops::crop_imm(sheet, 0, 0, size, size).to_image())
}
