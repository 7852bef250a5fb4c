//! Error types for dev-server profile operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for profile loading and validation.
#[derive(Debug, Error)]
pub enum ServeProfileError {
    /// Reading the profile document from disk failed.
    #[error("failed to read profile document")]
    Io {
        /// Path of the document that could not be read.
        path: PathBuf,
        /// Source IO error.
        source: io::Error,
    },
    /// The profile document was not valid TOML for the schema.
    #[error("failed to parse profile document")]
    Parse {
        /// Path of the document that failed to parse.
        path: PathBuf,
        /// Source deserialization error.
        source: toml::de::Error,
    },
    /// A field held a value outside its legal range.
    #[error("invalid profile field")]
    InvalidField {
        /// Field that failed validation, dotted for nested records.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
        /// Offending value when available.
        value: Option<String>,
    },
}

/// Convenience alias for profile results.
pub type ServeProfileResult<T> = Result<T, ServeProfileError>;
