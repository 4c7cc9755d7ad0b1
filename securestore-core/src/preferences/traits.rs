//! Platform interface for the preference store.

use super::error::PreferenceResult;

/// Per-app key-value store provided by the host platform.
///
/// Values are opaque bytes. Implementations must replace a key's value as a
/// whole: a reader never observes a partially written value.
///
/// # Platform Implementations
///
/// - **iOS**: `UserDefaults.standard` (`data(forKey:)` / `set(_:forKey:)`)
/// - **Android**: `SharedPreferences` with base64-encoded values
/// - **Desktop / tests**: [`super::FilePreferenceStore`],
///   [`super::MemoryPreferenceStore`]
#[uniffi::export(with_foreign)]
pub trait PreferenceStore: Send + Sync {
    /// Reads the value stored under `key`, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn get(&self, key: String) -> PreferenceResult<Option<Vec<u8>>>;

    /// Stores `value` under `key`, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn set(&self, key: String, value: Vec<u8>) -> PreferenceResult<()>;

    /// Removes the value stored under `key`.
    ///
    /// Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the removal fails.
    fn remove(&self, key: String) -> PreferenceResult<()>;
}
