//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image codec, and JSON errors, and provides semantic variants
//! for argument validation, manifest checks, and undersized reference sheets.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Invalid color: {value}. Expected #RRGGBB")]
    InvalidColor { value: String },

    #[error("Image {width}x{height} is too small to extract an icon")]
    EmptyCrop { width: u32, height: u32 },

    #[error("Source file not found: {path:?}")]
    SourceNotFound { path: PathBuf },

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),
}
