//! Directory-backed preference store.
//!
//! Each key maps to one file under `<root>/securestore/`. Writes go to a
//! temporary sibling which is synced and then renamed over the target, so a
//! crash leaves either the complete old value or the complete new one.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::error::{PreferenceError, PreferenceResult};
use super::traits::PreferenceStore;

const STORE_DIRNAME: &str = "securestore";
const VALUE_EXTENSION: &str = "pref";
const TEMP_EXTENSION: &str = "pref.tmp";

/// Preference store persisting each key as a file.
#[derive(Debug, Clone, uniffi::Object)]
pub struct FilePreferenceStore {
    dir: PathBuf,
}

impl FilePreferenceStore {
    /// Opens (creating if needed) the store rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store directory cannot be created.
    pub fn open(root: impl AsRef<Path>) -> PreferenceResult<Self> {
        let dir = root.as_ref().join(STORE_DIRNAME);
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Returns the directory holding the preference files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file path backing `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError::InvalidKey`] if `key` is empty or contains
    /// characters outside `[A-Za-z0-9._-]`, or starts with a dot.
    pub fn value_path(&self, key: &str) -> PreferenceResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.{VALUE_EXTENSION}")))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{TEMP_EXTENSION}"))
    }
}

#[uniffi::export]
impl FilePreferenceStore {
    /// Opens (creating if needed) the store rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store directory cannot be created.
    #[uniffi::constructor]
    pub fn from_root(root: String) -> PreferenceResult<Arc<Self>> {
        Self::open(PathBuf::from(root)).map(Arc::new)
    }

    /// Returns the store directory as a string.
    #[must_use]
    pub fn dir_path_string(&self) -> String {
        self.dir.to_string_lossy().to_string()
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: String) -> PreferenceResult<Option<Vec<u8>>> {
        let path = self.value_path(&key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: String, value: Vec<u8>) -> PreferenceResult<()> {
        let path = self.value_path(&key)?;
        let temp = self.temp_path(&key);
        {
            let mut file = File::create(&temp)?;
            file.write_all(&value)?;
            file.sync_all()?;
        }
        fs::rename(&temp, &path)?;
        log::trace!("wrote preference {key} ({} bytes)", value.len());
        Ok(())
    }

    fn remove(&self, key: String) -> PreferenceResult<()> {
        let path = self.value_path(&key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

fn validate_key(key: &str) -> PreferenceResult<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(PreferenceError::InvalidKey(key.to_string()))
    }
}
