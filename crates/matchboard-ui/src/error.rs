//! Error types for shell bootstrap operations.

use thiserror::Error;

/// Primary error type for bringing up the board shell.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The document does not carry the designated mount point, so there is
    /// nowhere to render into.
    #[error("mount point `#{id}` missing from document")]
    MountPointMissing {
        /// Element id the bootstrap expected to find.
        id: &'static str,
    },
    /// A shell instance already claimed this process.
    #[error("shell already bootstrapped")]
    AlreadyBootstrapped,
}

/// Convenience alias for shell results.
pub type ShellResult<T> = Result<T, ShellError>;
