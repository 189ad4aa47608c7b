//! High-level, ergonomic library API: process an image in memory, a single file to
//! disk, or a whole manifest of jobs. Prefer these entrypoints over the low-level
//! processing modules when integrating logoproc.
use std::path::{Path, PathBuf};

use image::RgbaImage;
use serde::Serialize;
use tracing::{info, warn};

use crate::core::manifest::{JobSpec, Manifest};
use crate::core::params::ProcessingParams;
use crate::core::processing::pipeline::{PipelineOutcome, run_pipeline};
use crate::error::{Error, Result};
use crate::io::reader::load_rgba;
use crate::io::writers::png::write_png;

/// Batch processing report
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub outputs: Vec<OutputRecord>,
}

/// One written file
#[derive(Debug, Clone, Serialize)]
pub struct OutputRecord {
    pub source: String,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Run the pipeline on an already decoded image (no disk I/O)
pub fn process_image(
    img: RgbaImage,
    job: &JobSpec,
    params: &ProcessingParams,
) -> Result<PipelineOutcome> {
    params.validate()?;
    run_pipeline(img, job, params)
}

/// Load `input`, run the pipeline for `job`, and save PNG to `output`.
/// Returns the dimensions of the saved image.
pub fn process_file_to_path(
    input: &Path,
    output: &Path,
    job: &JobSpec,
    params: &ProcessingParams,
) -> Result<(u32, u32)> {
    let img = load_rgba(input)?;
    let outcome = process_image(img, job, params)?;
    write_png(output, &outcome.image)?;
    Ok(outcome.image.dimensions())
}

/// Process every job of `manifest`, reading from `source_dir` and writing into `output_dir`.
/// Missing sources are skipped with a warning. If `continue_on_error` is true, failures are
/// counted in the report and processing continues; otherwise, the first error is returned.
pub fn process_manifest(
    manifest: &Manifest,
    source_dir: &Path,
    output_dir: &Path,
    params: &ProcessingParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    params.validate()?;
    manifest.validate()?;
    std::fs::create_dir_all(output_dir).map_err(Error::from)?;

    info!(
        "Processing {} jobs ({} pipeline) from {:?}",
        manifest.jobs.len(),
        manifest.variant,
        source_dir
    );

    let mut report = BatchReport::default();

    for job in &manifest.jobs {
        let input = source_dir.join(&job.source);
        if !input.is_file() {
            warn!("File not found, skipping: {}", job.source);
            report.skipped += 1;
            continue;
        }

        let output = output_dir.join(job.output_file_name());
        info!("Processing {} ({}) -> {:?}", job.source, job.kind, output);

        match process_file_to_path(&input, &output, job, params) {
            Ok((width, height)) => {
                info!("  Saved {:?} ({}x{})", output, width, height);
                report.processed += 1;
                report.outputs.push(OutputRecord {
                    source: job.source.clone(),
                    output,
                    width,
                    height,
                });
            }
            Err(e) => {
                warn!("Error processing {}: {}", job.source, e);
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
            }
        }
    }

    Ok(report)
}
