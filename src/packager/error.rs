//! Error types for the packaging pipeline.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for packaging operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while building a font package.
#[derive(Error, Debug)]
pub enum Error {
    /// Catch-all error with a rendered message
    #[error("{0}")]
    GenericError(String),

    /// IO errors without further context
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Filesystem operation failure with the action and path that failed
    #[error("{action} {}: {source}", path.display())]
    Fs {
        /// What was being done, e.g. "copying font"
        action: String,
        /// Path the operation failed on
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// External command could not be executed
    #[error("failed to execute {command}: {error}")]
    CommandFailed {
        /// Command that failed to run
        command: String,
        /// Underlying IO error
        #[source]
        error: std::io::Error,
    },

    /// Required external tool is not installed
    #[error("required tool not found in PATH: {tool}")]
    ToolMissing {
        /// Tool binary name
        tool: String,
    },

    /// A subset id with no known character ranges
    #[error("unknown subset id: {0}")]
    UnknownSubset(String),

    /// Subset generation failed for a specific font file
    #[error("subsetting failed for {}: {reason}", path.display())]
    SubsetFailed {
        /// Path of the font that failed to subset
        path: PathBuf,
        /// Tool output or failure description
        reason: String,
    },

    /// A font file whose tables could not be read
    #[error("unreadable font {}: {reason}", path.display())]
    BadFont {
        /// Path of the offending file
        path: PathBuf,
        /// Parse failure description
        reason: String,
    },
}

/// Attach a static message to `Option` / `Result` values.
pub trait Context<T> {
    /// Convert into [`Result`], using `msg` as the error context.
    fn context(self, msg: &str) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context(self, msg: &str) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}

impl<T> Context<T> for Result<T> {
    fn context(self, msg: &str) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{msg}: {e}")))
    }
}

/// Attach filesystem context (action + path) to raw IO results.
pub trait ErrorExt<T> {
    /// Convert an IO error into [`Error::Fs`] with the given action and path.
    fn fs_context(self, action: &str, path: &Path) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, action: &str, path: &Path) -> Result<T> {
        self.map_err(|source| Error::Fs {
            action: action.to_string(),
            path: path.to_path_buf(),
            source,
        })
    }
}
