//! Core processing building blocks: background removal, recolor strategies,
//! reference-sheet cropping, the fixed-order pipeline, job manifests and
//! thresholds. These are internal primitives consumed by the high-level `api` module.
pub mod manifest;
pub mod params;
pub mod processing;
