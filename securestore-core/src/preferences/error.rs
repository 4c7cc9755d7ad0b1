//! Error types for preference storage.

use thiserror::Error;

/// Result type for preference store operations.
pub type PreferenceResult<T> = Result<T, PreferenceError>;

/// Errors raised by preference store implementations.
#[derive(Debug, Error, PartialEq, Eq, uniffi::Error)]
pub enum PreferenceError {
    /// I/O failure in the backing storage.
    #[error("preference io error: {0}")]
    Io(String),

    /// The key cannot be mapped onto the backing storage.
    #[error("invalid preference key: {0}")]
    InvalidKey(String),

    /// Unexpected `UniFFI` callback error.
    #[error("unexpected uniffi callback error: {0}")]
    UnexpectedUniFFICallbackError(String),
}

impl From<uniffi::UnexpectedUniFFICallbackError> for PreferenceError {
    fn from(error: uniffi::UnexpectedUniFFICallbackError) -> Self {
        Self::UnexpectedUniFFICallbackError(error.reason)
    }
}

impl From<std::io::Error> for PreferenceError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}
