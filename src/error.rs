//! Error types for the form-filling library.
//!
//! This module defines all error types that can occur while generating FDF
//! data or driving the external `pdftk` process.

use std::path::PathBuf;
use std::process::ExitStatus;

/// Result type alias for form-filling operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during form filling or field extraction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Source PDF is missing or unreadable. Detected before `pdftk` is invoked.
    #[error("File does not exist or is not readable: {}", path.display())]
    InputNotFound {
        /// Path that failed the readability check
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: std::io::Error,
    },

    /// `pdftk` ran but exited with a nonzero status.
    ///
    /// The exit status and captured stderr are attached verbatim; this library
    /// does not reinterpret tool failures.
    #[error("pdftk exited with {status}: {stderr}")]
    Tool {
        /// Exit status reported by the process
        status: ExitStatus,
        /// Captured standard error output
        stderr: String,
    },

    /// `pdftk` could not be launched at all (binary missing, not executable).
    #[error("Failed to launch pdftk: {0}")]
    ToolSpawn(#[source] std::io::Error),

    /// IO error while piping data to/from the tool or writing a destination file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
