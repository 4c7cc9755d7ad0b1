//! Host-facing vault objects.
//!
//! Records cross the FFI boundary as plain records: identifiers as hyphenated
//! UUID strings and timestamps as unix milliseconds.
//!
//! # Example (Swift)
//!
//! ```swift
//! let store = try SecureStore(
//!     preferences: UserDefaultsPreferenceStore(),
//!     biometric: FaceIdAuthenticator(),
//!     config: StoreConfig(decodePolicy: .defaultEmpty)
//! )
//! if try store.gate().verify(raw: passcode) {
//!     let passwords = try store.passwords()
//!     let entry = try passwords.add(name: "Bank", username: "alice", password: "x1", category: "")
//!     let all = try passwords.list()
//! }
//! ```

mod types;
mod vaults;

pub use types::{ImageEntry, PasswordEntry};
pub use vaults::{ImageVault, PasswordVault};
