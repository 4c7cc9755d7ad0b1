use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Record;
use crate::preferences::IMAGES_KEY;

/// Category assigned to images added without an explicit one.
pub const DEFAULT_MEDIA_CATEGORY: &str = "Personal";

/// A stored image entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRecord {
    /// Identifier generated at creation.
    pub id: Uuid,
    /// Raw encoded image bytes (PNG, JPEG, ...).
    #[serde(with = "base64_bytes")]
    pub image_data: Vec<u8>,
    /// Free-form category label.
    pub category: String,
    /// Creation timestamp.
    pub date_added: DateTime<Utc>,
}

impl MediaRecord {
    /// Creates a record with a fresh identifier and the current time.
    #[must_use]
    pub fn new(image_data: Vec<u8>, category: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            image_data,
            category: category.into(),
            date_added: Utc::now(),
        }
    }

    /// Returns a copy carrying `image_data` in place of the current content.
    ///
    /// Identifier, category and timestamp are kept.
    #[must_use]
    pub fn with_content(mut self, image_data: Vec<u8>) -> Self {
        self.image_data = image_data;
        self
    }
}

impl Record for MediaRecord {
    const PREFERENCE_KEY: &'static str = IMAGES_KEY;
    const KIND: &'static str = "image";

    fn id(&self) -> Uuid {
        self.id
    }
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD as Base64, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&Base64.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        Base64.decode(encoded).map_err(serde::de::Error::custom)
    }
}
