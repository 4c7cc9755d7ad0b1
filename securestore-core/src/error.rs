use thiserror::Error;

use crate::preferences::PreferenceError;

/// Errors raised by the passcode gate.
#[derive(Debug, Error, PartialEq, Eq, uniffi::Error)]
pub enum GateError {
    /// The presented passcode is empty.
    #[error("passcode cannot be empty")]
    EmptyInput,
    /// The gate is locked; verify the current passcode or reset it first.
    #[error("passcode gate is locked")]
    Locked,
    /// The device offers no biometric authentication.
    #[error("biometric authentication is not available")]
    BiometricUnavailable,
    /// The platform reported a failed or cancelled biometric challenge.
    #[error("biometric authentication failed")]
    BiometricDenied,
    /// The preference store could not be read or written.
    #[error("preference store error: {0}")]
    Preferences(String),
}

impl From<PreferenceError> for GateError {
    fn from(error: PreferenceError) -> Self {
        Self::Preferences(error.to_string())
    }
}

/// Errors raised by the record stores.
#[derive(Debug, Error, PartialEq, Eq, uniffi::Error)]
pub enum StoreError {
    /// The record collection could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),
    /// The persisted collection could not be decoded.
    ///
    /// Only surfaced under [`crate::DecodePolicy::Propagate`].
    #[error("deserialization error: {0}")]
    Deserialization(String),
    /// The preference store could not be read or written.
    #[error("preference store error: {0}")]
    Preferences(String),
    /// The store mutex was poisoned by a panicking writer.
    #[error("store lock error: {0}")]
    Lock(String),
}

impl From<PreferenceError> for StoreError {
    fn from(error: PreferenceError) -> Self {
        Self::Preferences(error.to_string())
    }
}

/// Errors raised by the password generator.
#[derive(Debug, Error, PartialEq, Eq, uniffi::Error)]
pub enum GeneratorError {
    /// Every character class was disabled.
    #[error("select at least one character class")]
    NoCharacterClasses,
    /// The requested length is outside the supported range.
    #[error("password length {length} is outside {min}..={max}")]
    InvalidLength {
        /// Requested length.
        length: u32,
        /// Smallest supported length.
        min: u32,
        /// Largest supported length.
        max: u32,
    },
}

/// Error outputs from the [`crate::SecureStore`] facade.
#[derive(Debug, Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum SecureStoreError {
    /// Protected content was requested while the gate is locked.
    #[error("vault is locked")]
    Locked,
    /// The presented input is not valid for the requested operation.
    #[error("invalid_input: {0}")]
    InvalidInput(String),
    /// Passcode gate failure.
    #[error(transparent)]
    Gate(#[from] GateError),
    /// Record store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Password generator failure.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}
