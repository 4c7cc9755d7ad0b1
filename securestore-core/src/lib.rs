#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
//! On-device vault for passwords and images.
//!
//! The crate exposes two pieces of state to a mobile host:
//!
//! - a [`PasscodeGate`] that decides whether protected content may be shown,
//! - two record vaults (passwords and images) persisted as JSON blobs in the
//!   host's key-value preference store.
//!
//! Platform capabilities (the preference store itself, device biometrics and
//! log output) are supplied by the host through foreign traits.

mod biometric;
pub use biometric::{authenticate_app_entry, BiometricAuthenticator, APP_ENTRY_PROMPT};

mod error;
pub use error::*;

pub mod ffi;
pub use ffi::{ImageEntry, ImageVault, PasswordEntry, PasswordVault};

pub mod generator;
pub use generator::{generate_password, PasswordOptions};

pub mod logger;

pub mod passcode;
pub use passcode::{GateState, PasscodeGate};

pub mod preferences;
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};

pub mod records;
pub use records::{CredentialRecord, MediaRecord};

pub mod store;
pub use store::{DecodePolicy, RecordStore, StoreConfig};

mod vault;
pub use vault::SecureStore;

#[cfg(test)]
mod test_support;

uniffi::setup_scaffolding!("securestore_core");
