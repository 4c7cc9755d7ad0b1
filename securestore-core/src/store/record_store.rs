use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;

use super::{DecodePolicy, StoreConfig};
use crate::error::StoreError;
use crate::preferences::PreferenceStore;
use crate::records::Record;

/// Persistent, insertion-ordered collection of one record kind.
///
/// Load-modify-save cycles are serialized by an in-process mutex. Writers in
/// other processes are not coordinated; the host is expected to own the
/// preference store from a single foreground process.
pub struct RecordStore<R: Record> {
    preferences: Arc<dyn PreferenceStore>,
    config: StoreConfig,
    write_lock: Mutex<()>,
    kind: PhantomData<fn() -> R>,
}

impl<R: Record> std::fmt::Debug for RecordStore<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("key", &R::PREFERENCE_KEY)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<R: Record> RecordStore<R> {
    /// Creates a store over `preferences`.
    #[must_use]
    pub fn new(preferences: Arc<dyn PreferenceStore>, config: StoreConfig) -> Self {
        Self {
            preferences,
            config,
            write_lock: Mutex::new(()),
            kind: PhantomData,
        }
    }

    /// Returns the configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Loads the full collection in insertion order.
    ///
    /// A missing blob yields an empty collection. An undecodable blob yields
    /// an empty collection under [`DecodePolicy::DefaultEmpty`].
    ///
    /// # Errors
    ///
    /// Returns an error if the preference store fails, or if the blob cannot
    /// be decoded under [`DecodePolicy::Propagate`].
    pub fn load_all(&self) -> Result<Vec<R>, StoreError> {
        self.read_collection()
    }

    /// Returns the record with identifier `id`, if any.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load_all`].
    pub fn get(&self, id: Uuid) -> Result<Option<R>, StoreError> {
        Ok(self
            .read_collection()?
            .into_iter()
            .find(|record| record.id() == id))
    }

    /// Appends `record` and persists the collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if encoding fails, or an error
    /// from loading or writing the collection.
    pub fn add(&self, record: R) -> Result<(), StoreError> {
        let _guard = self.guard()?;
        let mut records = self.read_collection()?;
        let id = record.id();
        records.push(record);
        self.write_collection(&records)?;
        log::debug!("added {} record {id} ({} total)", R::KIND, records.len());
        Ok(())
    }

    /// Removes the record with identifier `id` and persists the remainder.
    ///
    /// Removing an absent identifier leaves the collection unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error from loading or writing the collection.
    pub fn remove(&self, id: Uuid) -> Result<(), StoreError> {
        let _guard = self.guard()?;
        let mut records = self.read_collection()?;
        if let Some(index) = records.iter().position(|record| record.id() == id) {
            records.remove(index);
            log::debug!("removed {} record {id}", R::KIND);
        }
        self.write_collection(&records)
    }

    /// Replaces the record with identifier `id` by `mutate(record)` and
    /// persists the collection.
    ///
    /// `mutate` must keep the identifier. Absent identifiers are a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error from loading or writing the collection.
    pub fn update<F>(&self, id: Uuid, mutate: F) -> Result<(), StoreError>
    where
        F: FnOnce(R) -> R,
    {
        let _guard = self.guard()?;
        let mut records = self.read_collection()?;
        let Some(index) = records.iter().position(|record| record.id() == id) else {
            return Ok(());
        };
        let updated = mutate(records[index].clone());
        debug_assert_eq!(updated.id(), id, "record identifiers are immutable");
        records[index] = updated;
        self.write_collection(&records)?;
        log::debug!("updated {} record {id}", R::KIND);
        Ok(())
    }

    /// Deletes the persisted collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference store fails.
    pub fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.guard()?;
        self.preferences.remove(R::PREFERENCE_KEY.to_string())?;
        Ok(())
    }

    fn guard(&self) -> Result<MutexGuard<'_, ()>, StoreError> {
        self.write_lock
            .lock()
            .map_err(|_| StoreError::Lock(format!("{} store mutex poisoned", R::KIND)))
    }

    fn read_collection(&self) -> Result<Vec<R>, StoreError> {
        let Some(bytes) = self.preferences.get(R::PREFERENCE_KEY.to_string())? else {
            return Ok(Vec::new());
        };
        match serde_json::from_slice::<Vec<R>>(&bytes) {
            Ok(records) => Ok(records),
            Err(err) => match self.config.decode_policy {
                DecodePolicy::DefaultEmpty => {
                    log::warn!(
                        "discarding undecodable {} collection under {}: {err}",
                        R::KIND,
                        R::PREFERENCE_KEY
                    );
                    Ok(Vec::new())
                }
                DecodePolicy::Propagate => Err(StoreError::Deserialization(err.to_string())),
            },
        }
    }

    fn write_collection(&self, records: &[R]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(records)
            .map_err(|err| StoreError::Serialization(err.to_string()))?;
        self.preferences
            .set(R::PREFERENCE_KEY.to_string(), bytes)?;
        Ok(())
    }
}
