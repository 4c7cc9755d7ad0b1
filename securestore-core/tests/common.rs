//! Common test utilities shared across integration tests.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use securestore_core::{
    BiometricAuthenticator, FilePreferenceStore, SecureStore, StoreConfig,
};
use uuid::Uuid;

/// Biometric capability that answers every challenge the same way and
/// records the prompts it was shown.
pub struct ScriptedBiometric {
    approve: bool,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedBiometric {
    /// Creates a capability approving challenges iff `approve`.
    pub fn new(approve: bool) -> Arc<Self> {
        Arc::new(Self {
            approve,
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Returns the prompts shown so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl BiometricAuthenticator for ScriptedBiometric {
    fn is_available(&self) -> bool {
        true
    }

    async fn authenticate(&self, reason: String) -> bool {
        self.prompts.lock().unwrap().push(reason);
        self.approve
    }
}

/// Creates a unique empty directory under the system temp dir.
pub fn temp_root() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("securestore-test-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&path).expect("create temp root");
    path
}

/// Removes a directory created by [`temp_root`].
pub fn cleanup(root: &Path) {
    let _ = std::fs::remove_dir_all(root);
}

/// Opens a store over `root` as a freshly launched process would.
pub fn launch(
    root: &Path,
    biometric: Arc<ScriptedBiometric>,
    config: StoreConfig,
) -> Arc<SecureStore> {
    let preferences = Arc::new(FilePreferenceStore::open(root).expect("open preferences"));
    SecureStore::new(preferences, biometric, config).expect("open store")
}
