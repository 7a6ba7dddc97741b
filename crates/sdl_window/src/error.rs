//! Window error types

use thiserror::Error;

/// Errors raised by fallible native window calls
///
/// The payload is the native library's last-error text, read right after the
/// failing call returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// Native resource creation failed
    #[error("Window creation failed: {0}")]
    Creation(String),

    /// A documented-fallible state change failed
    #[error("Window state change failed: {0}")]
    StateChange(String),
}

impl WindowError {
    /// Native diagnostic text
    pub fn message(&self) -> &str {
        match self {
            Self::Creation(msg) | Self::StateChange(msg) => msg,
        }
    }
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;
