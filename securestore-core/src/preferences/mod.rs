//! Key-value preference storage.
//!
//! Every piece of persisted state lives under a fixed key in the host's
//! per-app preference store (`UserDefaults` on iOS, `SharedPreferences` on
//! Android). The host supplies the store through [`PreferenceStore`]; the
//! crate ships an in-memory store for tests and a directory-backed store for
//! desktop tooling.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{PreferenceError, PreferenceResult};
pub use file::FilePreferenceStore;
pub use memory::MemoryPreferenceStore;
pub use traits::PreferenceStore;

/// Key holding the JSON-encoded password collection.
pub const PASSWORDS_KEY: &str = "savedPasswords";

/// Key holding the JSON-encoded image collection.
pub const IMAGES_KEY: &str = "savedImages";

/// Key holding the lowercase hex passcode digest.
pub const PASSCODE_DIGEST_KEY: &str = "storedPasswordHash";
