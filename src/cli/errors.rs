use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Argument {arg} only applies to {mode} mode")]
    WrongMode { arg: String, mode: &'static str },

    #[error("Argument {arg} cannot be combined with {other}")]
    Conflict { arg: String, other: String },

    #[error("{failed} job(s) failed")]
    JobsFailed { failed: usize },

    #[error(transparent)]
    Logoproc(#[from] logoproc::Error),
}
