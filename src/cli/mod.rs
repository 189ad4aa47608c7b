//! Command Line Interface (CLI) layer for logoproc.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for single-file and manifest
//! processing flows. It wires user-provided options to the underlying
//! library functionality exposed via `logoproc::api`.
//!
//! If you are embedding logoproc into another application, prefer using
//! the high-level `logoproc::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
