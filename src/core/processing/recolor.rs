use image::{Rgb, Rgba, RgbaImage};
use tracing::debug;

use crate::core::params::{ProcessingParams, ToneThresholds};
use crate::types::{RecolorStrategy, Tone};

/// Euclidean distance between two colors in RGB space
pub fn color_distance(a: Rgb<u8>, b: Rgb<u8>) -> f64 {
    a.0.iter()
        .zip(b.0.iter())
        .map(|(&x, &y)| {
            let d = x as f64 - y as f64;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Orange/yellow: strong red, some green, little blue, with r > g > b
pub fn is_warm_tone(r: u8, g: u8, b: u8, tone: &ToneThresholds) -> bool {
    r > tone.warm_min_red && g > tone.warm_min_green && b < tone.warm_max_blue && r > g && g > b
}

/// Classify a pixel; the first matching rule wins.
pub fn classify_tone(pixel: &Rgba<u8>, tone: &ToneThresholds) -> Tone {
    let [r, g, b, a] = pixel.0;

    if a < tone.min_alpha {
        return Tone::Transparent;
    }
    if r < tone.shadow_max && g < tone.shadow_max && b < tone.shadow_max {
        return Tone::Shadow;
    }
    if r > tone.highlight_min && g > tone.highlight_min && b > tone.highlight_min {
        return Tone::Highlight;
    }
    if b > r && b > g {
        return Tone::Cool;
    }
    if is_warm_tone(r, g, b, tone) {
        return Tone::Warm;
    }
    Tone::Neutral
}

/// Target color scaled by the mean channel brightness of `pixel`, alpha kept.
pub fn remap_preserving_brightness(pixel: &Rgba<u8>, target: Rgb<u8>) -> Rgba<u8> {
    let [r, g, b, a] = pixel.0;
    let brightness = (r as f64 + g as f64 + b as f64) / 3.0;
    let intensity = brightness / 255.0;
    // Truncation toward zero; intensity is within [0, 1]
    let scale = |c: u8| (c as f64 * intensity) as u8;
    Rgba([scale(target[0]), scale(target[1]), scale(target[2]), a])
}

/// Flat replacement of every pixel within `tolerance` of the source color.
pub fn recolor_distance(img: &mut RgbaImage, params: &ProcessingParams) -> usize {
    let mut changed = 0usize;
    for pixel in img.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        if color_distance(Rgb([r, g, b]), params.source_color) < params.tolerance {
            let t = params.target_color;
            *pixel = Rgba([t[0], t[1], t[2], a]);
            changed += 1;
        }
    }
    changed
}

/// Brightness-preserving remap of warm-toned pixels. Shadows, highlights, cool
/// and transparent pixels are never touched.
pub fn recolor_tone(img: &mut RgbaImage, params: &ProcessingParams) -> usize {
    let mut changed = 0usize;
    for pixel in img.pixels_mut() {
        if classify_tone(pixel, &params.tone) == Tone::Warm {
            *pixel = remap_preserving_brightness(pixel, params.target_color);
            changed += 1;
        }
    }
    changed
}

pub fn recolor(img: &mut RgbaImage, params: &ProcessingParams) -> usize {
    let changed = match params.recolor {
        RecolorStrategy::Distance => recolor_distance(img, params),
        RecolorStrategy::Tone => recolor_tone(img, params),
    };
    debug!("recolor ({}): remapped {} pixels", params.recolor, changed);
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ORANGE_BASE, PURPLE_TARGET, Variant};

    fn single(px: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(1, 1, Rgba(px))
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(color_distance(Rgb([0, 0, 0]), Rgb([3, 4, 0])), 5.0);
        assert_eq!(color_distance(ORANGE_BASE, ORANGE_BASE), 0.0);
    }

    #[test]
    fn classify_follows_rule_order() {
        let tone = ToneThresholds::default();
        // Transparent wins even for a perfectly warm color
        assert_eq!(classify_tone(&Rgba([255, 149, 0, 9]), &tone), Tone::Transparent);
        assert_eq!(classify_tone(&Rgba([29, 10, 0, 255]), &tone), Tone::Shadow);
        assert_eq!(classify_tone(&Rgba([230, 220, 210, 255]), &tone), Tone::Highlight);
        assert_eq!(classify_tone(&Rgba([0, 212, 255, 255]), &tone), Tone::Cool);
        assert_eq!(classify_tone(&Rgba([255, 149, 0, 255]), &tone), Tone::Warm);
        // g == b breaks the strict r > g > b ordering
        assert_eq!(classify_tone(&Rgba([200, 100, 100, 255]), &tone), Tone::Neutral);
        assert_eq!(classify_tone(&Rgba([120, 120, 120, 255]), &tone), Tone::Neutral);
    }

    #[test]
    fn tone_remap_scales_target_by_brightness() {
        let params = ProcessingParams::for_variant(Variant::Fixed);
        let mut img = single([255, 149, 0, 180]);

        assert_eq!(recolor(&mut img, &params), 1);
        // brightness 134.666.., intensity 0.52810..
        assert_eq!(img.get_pixel(0, 0), &Rgba([55, 0, 134, 180]));
    }

    #[test]
    fn tone_remap_leaves_blue_black_and_white_alone() {
        let params = ProcessingParams::for_variant(Variant::Fixed);
        for px in [
            [0, 212, 255, 255],
            [10, 5, 2, 255],
            [250, 240, 230, 255],
            [255, 149, 0, 0],
        ] {
            let mut img = single(px);
            assert_eq!(recolor(&mut img, &params), 0);
            assert_eq!(img.get_pixel(0, 0), &Rgba(px));
        }
    }

    #[test]
    fn distance_recolor_is_flat_and_keeps_alpha() {
        let params = ProcessingParams::for_variant(Variant::Legacy);
        let mut near = single([240, 160, 20, 77]);
        let mut far = single([200, 100, 0, 255]);

        assert_eq!(recolor(&mut near, &params), 1);
        let [r, g, b] = PURPLE_TARGET.0;
        assert_eq!(near.get_pixel(0, 0), &Rgba([r, g, b, 77]));
        assert_eq!(recolor(&mut far, &params), 0);
    }

    #[test]
    fn distance_bound_is_exclusive() {
        let mut params = ProcessingParams::for_variant(Variant::Legacy);
        // exactly 30 away from orange along red
        let mut img = single([225, 149, 0, 255]);
        params.tolerance = 30.0;
        assert_eq!(recolor(&mut img, &params), 0);
        params.tolerance = 30.5;
        assert_eq!(recolor(&mut img, &params), 1);
    }
}
