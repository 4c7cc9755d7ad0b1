use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// SHA-256 digest of a passcode in its stored form: 64 lowercase hex chars.
///
/// The digest is unsalted and unstretched so values written by earlier
/// releases keep verifying. Stored values are compared as text, so a
/// malformed stored value simply never matches.
#[derive(Clone, PartialEq, Eq)]
pub struct PasscodeDigest(String);

impl PasscodeDigest {
    /// Hashes the UTF-8 bytes of `raw`.
    #[must_use]
    pub fn of(raw: &str) -> Self {
        Self(hex::encode(Sha256::digest(raw.as_bytes())))
    }

    /// Wraps a value read back from the preference store.
    #[must_use]
    pub fn from_stored(encoded: &str) -> Self {
        Self(encoded.trim().to_string())
    }

    /// Returns the stored text form.
    #[must_use]
    pub fn as_hex(&self) -> &str {
        &self.0
    }

    /// Compares two digests in constant time.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.0.as_bytes().ct_eq(other.0.as_bytes()).into()
    }

    /// Hashes `raw` and wipes the passcode buffer afterwards.
    pub(crate) fn of_secret(raw: String) -> Self {
        let raw = Zeroizing::new(raw);
        Self::of(&raw)
    }
}

impl std::fmt::Debug for PasscodeDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PasscodeDigest").field(&"<redacted>").finish()
    }
}
