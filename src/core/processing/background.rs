use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::core::params::ProcessingParams;

const CLEAR_LIGHT: Rgba<u8> = Rgba([255, 255, 255, 0]);
const CLEAR_DARK: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Returns the replacement for a background pixel, or None if the pixel is content.
/// Alpha is not consulted; light is tested before dark.
pub fn classify_background(
    pixel: &Rgba<u8>,
    light_threshold: u8,
    dark_threshold: u8,
) -> Option<Rgba<u8>> {
    let [r, g, b, _] = pixel.0;
    if r > light_threshold && g > light_threshold && b > light_threshold {
        Some(CLEAR_LIGHT)
    } else if r < dark_threshold && g < dark_threshold && b < dark_threshold {
        Some(CLEAR_DARK)
    } else {
        None
    }
}

/// Clear near-white and near-black pixels in place. Returns the number of cleared pixels.
pub fn remove_background(img: &mut RgbaImage, params: &ProcessingParams) -> usize {
    let mut cleared = 0usize;
    for pixel in img.pixels_mut() {
        if let Some(replacement) =
            classify_background(pixel, params.light_threshold, params.dark_threshold)
        {
            *pixel = replacement;
            cleared += 1;
        }
    }

    debug!(
        "remove_background: cleared {} of {} pixels (light>{}, dark<{})",
        cleared,
        img.width() as usize * img.height() as usize,
        params.light_threshold,
        params.dark_threshold
    );
    cleared
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Variant;

    fn strip(pixels: &[[u8; 4]]) -> RgbaImage {
        let raw: Vec<u8> = pixels.iter().flatten().copied().collect();
        RgbaImage::from_raw(pixels.len() as u32, 1, raw).unwrap()
    }

    #[test]
    fn light_and_dark_pixels_become_transparent() {
        let mut img = strip(&[
            [250, 245, 241, 255],
            [5, 10, 14, 200],
            [255, 149, 0, 255],
            [240, 250, 250, 255],
        ]);
        let cleared = remove_background(&mut img, &ProcessingParams::for_variant(Variant::Fixed));

        assert_eq!(cleared, 2);
        assert_eq!(img.get_pixel(0, 0), &Rgba([255, 255, 255, 0]));
        assert_eq!(img.get_pixel(1, 0), &Rgba([0, 0, 0, 0]));
        assert_eq!(img.get_pixel(2, 0), &Rgba([255, 149, 0, 255]));
        // 240 is not strictly above the threshold
        assert_eq!(img.get_pixel(3, 0), &Rgba([240, 250, 250, 255]));
    }

    #[test]
    fn legacy_dark_cutoff_is_wider() {
        let glow = [18, 17, 16, 255];
        let mut legacy = strip(&[glow]);
        let mut fixed = strip(&[glow]);

        remove_background(&mut legacy, &ProcessingParams::for_variant(Variant::Legacy));
        remove_background(&mut fixed, &ProcessingParams::for_variant(Variant::Fixed));

        assert_eq!(legacy.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
        assert_eq!(fixed.get_pixel(0, 0), &Rgba(glow));
    }

    #[test]
    fn fixed_dark_cutoff_is_strict() {
        let mut img = strip(&[[15, 15, 15, 255], [14, 14, 14, 255], [14, 14, 15, 255]]);
        let cleared = remove_background(&mut img, &ProcessingParams::for_variant(Variant::Fixed));

        assert_eq!(cleared, 1);
        assert_eq!(img.get_pixel(0, 0), &Rgba([15, 15, 15, 255]));
        assert_eq!(img.get_pixel(1, 0), &Rgba([0, 0, 0, 0]));
        assert_eq!(img.get_pixel(2, 0), &Rgba([14, 14, 15, 255]));
    }

    #[test]
    fn already_transparent_pixels_are_still_classified() {
        let mut img = strip(&[[250, 250, 250, 0], [100, 100, 100, 0]]);
        let cleared = remove_background(&mut img, &ProcessingParams::default());
        assert_eq!(cleared, 1);
        assert_eq!(img.get_pixel(1, 0), &Rgba([100, 100, 100, 0]));
    }
}
