use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Record;
use crate::preferences::PASSWORDS_KEY;

/// Name given to records saved straight from the password generator.
pub const GENERATED_RECORD_NAME: &str = "Auto Generated";

/// Username given to records saved straight from the password generator.
pub const GENERATED_RECORD_USERNAME: &str = "yourpassword";

/// A stored password entry.
///
/// The secret is kept in plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRecord {
    /// Identifier generated at creation.
    pub id: Uuid,
    /// Service name, e.g. `Bank`.
    pub name: String,
    /// Account username.
    pub username: String,
    /// Secret value.
    pub password: String,
    /// Free-form category label, possibly empty.
    pub category: String,
    /// Creation timestamp.
    pub date_added: DateTime<Utc>,
}

impl CredentialRecord {
    /// Creates a record with a fresh identifier and the current time.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self::with_date(name, username, password, category, Utc::now())
    }

    /// Creates a record with a fresh identifier and an explicit timestamp.
    #[must_use]
    pub fn with_date(
        name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        category: impl Into<String>,
        date_added: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            username: username.into(),
            password: password.into(),
            category: category.into(),
            date_added,
        }
    }

    /// Wraps a generator output in a record with the placeholder name and
    /// username used by the generator screen.
    #[must_use]
    pub fn generated(password: impl Into<String>) -> Self {
        Self::new(
            GENERATED_RECORD_NAME,
            GENERATED_RECORD_USERNAME,
            password,
            String::new(),
        )
    }
}

impl Record for CredentialRecord {
    const PREFERENCE_KEY: &'static str = PASSWORDS_KEY;
    const KIND: &'static str = "password";

    fn id(&self) -> Uuid {
        self.id
    }
}
