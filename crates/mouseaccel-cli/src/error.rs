//! Error types for accelctl CLI

use std::path::PathBuf;

use mouseaccel_curves::CurveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid configuration {path}: {source}")]
    InvalidConfiguration {
        path: PathBuf,
        #[source]
        source: mouseaccel_errors::ParamError,
    },

    #[error("Cannot read input {path}: {source}")]
    UnreadableInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input at line {line}: {reason}")]
    InvalidInput { line: usize, reason: String },

    #[error("Invalid curve range: {0}")]
    InvalidRange(#[from] CurveError),
}

impl CliError {
    pub fn invalid_input(line: usize, reason: impl Into<String>) -> Self {
        CliError::InvalidInput {
            line,
            reason: reason.into(),
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::InvalidConfiguration { .. } => 2,
            CliError::InvalidInput { .. } | CliError::UnreadableInput { .. } => 3,
            CliError::InvalidRange(_) => 1,
        }
    }
}
