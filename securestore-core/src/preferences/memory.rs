//! In-memory preference store.
//!
//! Nothing is persisted beyond the lifetime of the value. Sharing one
//! instance between two facades simulates a process restart over the same
//! device storage.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::error::{PreferenceError, PreferenceResult};
use super::traits::PreferenceStore;

/// Preference store backed by a `HashMap`.
#[derive(Debug, Default, uniffi::Object)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryPreferenceStore {
    fn values(
        &self,
    ) -> PreferenceResult<std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>>> {
        self.values
            .lock()
            .map_err(|_| PreferenceError::Io("mutex poisoned".to_string()))
    }
}

#[uniffi::export]
impl MemoryPreferenceStore {
    /// Creates an empty store.
    #[uniffi::constructor]
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Returns the number of stored keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the store mutex is poisoned.
    pub fn len(&self) -> PreferenceResult<u64> {
        Ok(self.values()?.len() as u64)
    }

    /// Returns `true` if no keys are stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the store mutex is poisoned.
    pub fn is_empty(&self) -> PreferenceResult<bool> {
        Ok(self.values()?.is_empty())
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: String) -> PreferenceResult<Option<Vec<u8>>> {
        Ok(self.values()?.get(&key).cloned())
    }

    fn set(&self, key: String, value: Vec<u8>) -> PreferenceResult<()> {
        self.values()?.insert(key, value);
        Ok(())
    }

    fn remove(&self, key: String) -> PreferenceResult<()> {
        self.values()?.remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(store.get("k".to_string()).unwrap(), None);

        store.set("k".to_string(), vec![1, 2]).unwrap();
        assert_eq!(store.get("k".to_string()).unwrap(), Some(vec![1, 2]));
        assert_eq!(store.len().unwrap(), 1);

        store.set("k".to_string(), vec![3]).unwrap();
        assert_eq!(store.get("k".to_string()).unwrap(), Some(vec![3]));

        store.remove("k".to_string()).unwrap();
        store.remove("k".to_string()).unwrap();
        assert!(store.is_empty().unwrap());
    }
}
