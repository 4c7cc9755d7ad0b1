//! Whole-collection record persistence.
//!
//! Each record kind lives as a single JSON array under its preference key.
//! Every mutation reads the full collection, applies the change and writes the
//! full collection back.

mod record_store;

pub use record_store::RecordStore;

use strum::{Display, EnumString};

/// What to do when a persisted collection cannot be decoded.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, uniffi::Enum,
)]
#[strum(serialize_all = "kebab-case")]
pub enum DecodePolicy {
    /// Treat the collection as empty and log a warning. The next mutation
    /// overwrites the undecodable blob.
    #[default]
    DefaultEmpty,
    /// Surface [`crate::StoreError::Deserialization`] to the caller and leave
    /// the blob untouched.
    Propagate,
}

/// Configuration shared by the record stores.
#[derive(Debug, Clone, Default, PartialEq, Eq, uniffi::Record)]
pub struct StoreConfig {
    /// Behaviour on undecodable collections.
    pub decode_policy: DecodePolicy,
}

#[cfg(test)]
mod tests;
