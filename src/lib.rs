#![doc = r#"
logoproc — batch preparation of logo PNGs.

This crate turns raw logo renders into transparent, brand-colored assets. Each image runs
through a fixed pipeline: light/dark background removal, an optional orange-to-purple
recolor, and (for multi-size reference sheets) extraction of the largest icon. It powers
the `logoproc` CLI and can be embedded in your own Rust applications.

Two pipeline generations are available through [`Variant`]:
- `Legacy`: dark cutoff 20, flat recolor of pixels within a color distance of orange,
  reference-sheet cropping.
- `Fixed`: dark cutoff 15, tone classification that leaves shadows, highlights and blues
  alone and remaps warm tones to purple scaled by their brightness.

Quick start: process one image in memory
----------------------------------------
```rust
use image::{Rgba, RgbaImage};
use logoproc::{process_image, JobSpec, ProcessingParams, Variant};

fn main() -> logoproc::Result<()> {
    let img = RgbaImage::from_pixel(4, 4, Rgba([255, 149, 0, 255]));
    let job = JobSpec::single("in.png", "out.png", true);
    let params = ProcessingParams::for_variant(Variant::Fixed);

    let outcome = process_image(img, &job, &params)?;
    assert_eq!(outcome.recolored, 16);
    Ok(())
}
```

Batch: run a manifest
---------------------
```rust,no_run
use std::path::Path;
use logoproc::{process_manifest, Manifest, ProcessingParams, Variant};

fn main() -> logoproc::Result<()> {
    let manifest = Manifest::builtin(Variant::Legacy);
    let params = ProcessingParams::for_variant(manifest.variant);

    let report = process_manifest(
        &manifest,
        Path::new("mocks/Orizon"),
        Path::new("public/logos"),
        &params,
        true, // continue_on_error
    )?;

    println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
    Ok(())
}
```

Error handling
--------------
All public functions return `logoproc::Result<T>`; match on `logoproc::Error` to handle
specific cases.

```rust,no_run
use std::path::Path;
use logoproc::{process_file_to_path, Error, JobSpec, ProcessingParams};

fn main() {
    let job = JobSpec::reference_sheet("sheet.png", "gargantua-blue", false);
    match process_file_to_path(
        Path::new("sheet.png"),
        Path::new("out/gargantua-blue-icon.png"),
        &job,
        &ProcessingParams::default(),
    ) {
        Ok((w, h)) => println!("saved {w}x{h}"),
        Err(Error::SourceNotFound { path }) => eprintln!("missing: {path:?}"),
        Err(Error::EmptyCrop { width, height }) => eprintln!("sheet too small: {width}x{height}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — pixel classification, recolor, crop, pipeline, manifests and thresholds.
- [`types`] — enums and named colors (e.g. `Variant`, `RecolorStrategy`, `Tone`).
- [`io`] — image decoding, PNG and report writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::manifest::{JobSpec, Manifest};
pub use crate::core::params::{ProcessingParams, ToneThresholds};
pub use crate::core::processing::pipeline::PipelineOutcome;
pub use error::{Error, Result};
pub use types::{
    JobKind, ORANGE_BASE, PURPLE_TARGET, RecolorStrategy, Tone, Variant, parse_hex_color,
};

// Pixel-level helpers
pub use crate::core::processing::background::remove_background;
pub use crate::core::processing::crop::{extract_icon, icon_size};
pub use crate::core::processing::recolor::{classify_tone, color_distance, recolor};

// High-level API re-exports
pub use api::{BatchReport, OutputRecord, process_file_to_path, process_image, process_manifest};
