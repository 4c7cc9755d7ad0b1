use uuid::Uuid;

use crate::error::SecureStoreError;
use crate::records::{CredentialRecord, MediaRecord};

/// A stored password, as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct PasswordEntry {
    /// Hyphenated UUID.
    pub id: String,
    /// Service name.
    pub name: String,
    /// Account username.
    pub username: String,
    /// Plaintext secret.
    pub password: String,
    /// Category label, possibly empty.
    pub category: String,
    /// Creation time in unix milliseconds.
    pub date_added_ms: i64,
}

impl From<CredentialRecord> for PasswordEntry {
    fn from(record: CredentialRecord) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.name,
            username: record.username,
            password: record.password,
            category: record.category,
            date_added_ms: record.date_added.timestamp_millis(),
        }
    }
}

/// A stored image, as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct ImageEntry {
    /// Hyphenated UUID.
    pub id: String,
    /// Encoded image bytes.
    pub image_data: Vec<u8>,
    /// Category label.
    pub category: String,
    /// Creation time in unix milliseconds.
    pub date_added_ms: i64,
}

impl From<MediaRecord> for ImageEntry {
    fn from(record: MediaRecord) -> Self {
        Self {
            id: record.id.to_string(),
            image_data: record.image_data,
            category: record.category,
            date_added_ms: record.date_added.timestamp_millis(),
        }
    }
}

/// Parses a record identifier received from the host.
pub(crate) fn parse_id(id: &str) -> Result<Uuid, SecureStoreError> {
    Uuid::parse_str(id)
        .map_err(|err| SecureStoreError::InvalidInput(format!("record id {id:?}: {err}")))
}
