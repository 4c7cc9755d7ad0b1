use std::sync::Arc;

use super::types::{parse_id, ImageEntry, PasswordEntry};
use crate::error::{SecureStoreError, StoreError};
use crate::preferences::PreferenceStore;
use crate::records::{CredentialRecord, MediaRecord, DEFAULT_MEDIA_CATEGORY};
use crate::store::{RecordStore, StoreConfig};

/// Password collection persisted under `savedPasswords`.
#[derive(Debug, uniffi::Object)]
pub struct PasswordVault {
    store: RecordStore<CredentialRecord>,
}

impl PasswordVault {
    /// Returns the underlying typed store.
    #[must_use]
    pub const fn store(&self) -> &RecordStore<CredentialRecord> {
        &self.store
    }

    fn insert(&self, record: CredentialRecord) -> Result<PasswordEntry, StoreError> {
        self.store.add(record.clone())?;
        Ok(record.into())
    }
}

#[uniffi::export]
impl PasswordVault {
    /// Creates a vault over `preferences`.
    #[uniffi::constructor]
    #[must_use]
    pub fn new(preferences: Arc<dyn PreferenceStore>, config: StoreConfig) -> Arc<Self> {
        Arc::new(Self {
            store: RecordStore::new(preferences, config),
        })
    }

    /// Lists all passwords in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be loaded.
    pub fn list(&self) -> Result<Vec<PasswordEntry>, StoreError> {
        Ok(self
            .store
            .load_all()?
            .into_iter()
            .map(PasswordEntry::from)
            .collect())
    }

    /// Returns the password with identifier `id`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not a UUID or the collection cannot be
    /// loaded.
    pub fn get(&self, id: String) -> Result<Option<PasswordEntry>, SecureStoreError> {
        let id = parse_id(&id)?;
        Ok(self.store.get(id)?.map(PasswordEntry::from))
    }

    /// Adds a password dated now and returns the stored entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be loaded or saved.
    pub fn add(
        &self,
        name: String,
        username: String,
        password: String,
        category: String,
    ) -> Result<PasswordEntry, StoreError> {
        self.insert(CredentialRecord::new(name, username, password, category))
    }

    /// Saves a generator output under the placeholder name and username.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be loaded or saved.
    pub fn add_generated(&self, password: String) -> Result<PasswordEntry, StoreError> {
        self.insert(CredentialRecord::generated(password))
    }

    /// Removes the password with identifier `id`. Unknown identifiers are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not a UUID or the collection cannot be
    /// saved.
    pub fn remove(&self, id: String) -> Result<(), SecureStoreError> {
        let id = parse_id(&id)?;
        self.store.remove(id)?;
        Ok(())
    }
}

/// Image collection persisted under `savedImages`.
#[derive(Debug, uniffi::Object)]
pub struct ImageVault {
    store: RecordStore<MediaRecord>,
}

impl ImageVault {
    /// Returns the underlying typed store.
    #[must_use]
    pub const fn store(&self) -> &RecordStore<MediaRecord> {
        &self.store
    }
}

#[uniffi::export]
impl ImageVault {
    /// Creates a vault over `preferences`.
    #[uniffi::constructor]
    #[must_use]
    pub fn new(preferences: Arc<dyn PreferenceStore>, config: StoreConfig) -> Arc<Self> {
        Arc::new(Self {
            store: RecordStore::new(preferences, config),
        })
    }

    /// Lists all images in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be loaded.
    pub fn list(&self) -> Result<Vec<ImageEntry>, StoreError> {
        Ok(self
            .store
            .load_all()?
            .into_iter()
            .map(ImageEntry::from)
            .collect())
    }

    /// Returns the image with identifier `id`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not a UUID or the collection cannot be
    /// loaded.
    pub fn get(&self, id: String) -> Result<Option<ImageEntry>, SecureStoreError> {
        let id = parse_id(&id)?;
        Ok(self.store.get(id)?.map(ImageEntry::from))
    }

    /// Adds an image dated now and returns the stored entry.
    ///
    /// `category` defaults to `Personal`.
    ///
    /// # Errors
    ///
    /// Returns an error if `image_data` is empty or the collection cannot be
    /// loaded or saved.
    pub fn add(
        &self,
        image_data: Vec<u8>,
        category: Option<String>,
    ) -> Result<ImageEntry, SecureStoreError> {
        if image_data.is_empty() {
            return Err(SecureStoreError::InvalidInput(
                "image data is empty".to_string(),
            ));
        }
        let category = category.unwrap_or_else(|| DEFAULT_MEDIA_CATEGORY.to_string());
        let record = MediaRecord::new(image_data, category);
        self.store.add(record.clone())?;
        Ok(record.into())
    }

    /// Replaces the content of the image with identifier `id`, e.g. after an
    /// edit. Unknown identifiers are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not a UUID or the collection cannot be
    /// loaded or saved.
    pub fn replace_content(&self, id: String, image_data: Vec<u8>) -> Result<(), SecureStoreError> {
        let id = parse_id(&id)?;
        self.store
            .update(id, move |record| record.with_content(image_data))?;
        Ok(())
    }

    /// Removes the image with identifier `id`. Unknown identifiers are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not a UUID or the collection cannot be
    /// saved.
    pub fn remove(&self, id: String) -> Result<(), SecureStoreError> {
        let id = parse_id(&id)?;
        self.store.remove(id)?;
        Ok(())
    }
}
