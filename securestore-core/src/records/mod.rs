//! Stored record types.
//!
//! Both record kinds serialize with camel-case field names, hyphenated UUID
//! identifiers and RFC 3339 timestamps.

mod credential;
mod media;

pub use credential::{CredentialRecord, GENERATED_RECORD_NAME, GENERATED_RECORD_USERNAME};
pub use media::{MediaRecord, DEFAULT_MEDIA_CATEGORY};

use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

/// A record kind persisted as one collection under a fixed preference key.
pub trait Record: Clone + Serialize + DeserializeOwned + Send {
    /// Preference key holding the encoded collection.
    const PREFERENCE_KEY: &'static str;

    /// Short label used in log output.
    const KIND: &'static str;

    /// Unique, immutable identifier of this record.
    fn id(&self) -> Uuid;
}
