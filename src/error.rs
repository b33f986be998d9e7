//! Crate-level error types for fontpack operations.
//!
//! This module defines the top-level error type returned to the CLI caller,
//! wrapping the domain errors produced inside the packaging pipeline.

use thiserror::Error;

/// Result type alias for fontpack operations
pub type Result<T> = std::result::Result<T, FontpackError>;

/// Main error type for all fontpack operations
#[derive(Error, Debug)]
pub enum FontpackError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Packaging pipeline errors
    #[error("Packaging error: {0}")]
    Packager(#[from] crate::packager::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Missing required argument
    #[error("Missing required argument: {argument}")]
    MissingArgument {
        /// Argument name
        argument: String,
    },
}
