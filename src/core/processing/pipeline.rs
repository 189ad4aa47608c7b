use image::RgbaImage;
use tracing::debug;

use crate::core::manifest::JobSpec;
use crate::core::params::ProcessingParams;
use crate::core::processing::background::remove_background;
use crate::core::processing::crop::extract_icon;
use crate::core::processing::recolor::recolor;
use crate::error::Result;
use crate::types::JobKind;

/// Final image plus per-step pixel counts
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub image: RgbaImage,
    pub cleared: usize,
    pub recolored: usize,
    pub cropped: bool,
}

/// Background removal, then recolor, then icon crop. The order is fixed.
pub fn run_pipeline(
    mut img: RgbaImage,
    job: &JobSpec,
    params: &ProcessingParams,
) -> Result<PipelineOutcome> {
    let cleared = if job.remove_background {
        remove_background(&mut img, params)
    } else {
        0
    };

    let recolored = if job.recolor {
        recolor(&mut img, params)
    } else {
        0
    };

    let (image, cropped) = match job.kind {
        JobKind::Single => (img, false),
        JobKind::ReferenceSheet => (extract_icon(&img)?, true),
    };

    debug!(
        "run_pipeline: {} -> {}x{} (cleared={}, recolored={}, cropped={})",
        job.source,
        image.width(),
        image.height(),
        cleared,
        recolored,
        cropped
    );

    Ok(PipelineOutcome {
        image,
        cleared,
        recolored,
        cropped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Variant;
    use image::Rgba;

    #[test]
    fn background_is_cleared_before_recolor() {
        // The dark pixel matches the recolor source but is cleared first
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([255, 149, 0, 255]));
        img.put_pixel(1, 0, Rgba([19, 5, 0, 255]));
        let mut params = ProcessingParams::for_variant(Variant::Legacy);
        params.source_color = image::Rgb([19, 5, 0]);
        params.tolerance = 1.0;

        let job = JobSpec::single("in.png", "out.png", true);
        let out = run_pipeline(img, &job, &params).unwrap();

        assert_eq!(out.cleared, 1);
        assert_eq!(out.recolored, 0);
        assert_eq!(out.image.get_pixel(1, 0), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn flags_disable_steps() {
        let img = RgbaImage::from_pixel(3, 3, Rgba([255, 255, 255, 255]));
        let mut job = JobSpec::single("in.png", "out.png", false);
        job.remove_background = false;

        let out = run_pipeline(img.clone(), &job, &ProcessingParams::default()).unwrap();
        assert_eq!(out.image, img);
        assert_eq!((out.cleared, out.recolored, out.cropped), (0, 0, false));
    }

    #[test]
    fn reference_sheet_is_cropped_after_recolor() {
        let img = RgbaImage::from_pixel(12, 8, Rgba([255, 149, 0, 255]));
        let job = JobSpec::reference_sheet("sheet.png", "icon", true);
        let out = run_pipeline(img, &job, &ProcessingParams::for_variant(Variant::Legacy)).unwrap();

        assert!(out.cropped);
        assert_eq!(out.image.dimensions(), (4, 4));
        assert_eq!(out.recolored, 96);
        assert_eq!(out.image.get_pixel(3, 3), &Rgba([106, 0, 255, 255]));
    }
}
