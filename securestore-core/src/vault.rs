//! Host entry point tying the gate and both vaults together.

use std::sync::Arc;

use crate::biometric::BiometricAuthenticator;
use crate::error::SecureStoreError;
use crate::ffi::{ImageVault, PasswordEntry, PasswordVault};
use crate::generator::{self, PasswordOptions};
use crate::passcode::PasscodeGate;
use crate::preferences::PreferenceStore;
use crate::store::StoreConfig;

/// Passcode-gated access to the password and image vaults.
///
/// Vault handles are only handed out while the gate permits protected
/// content. A handle obtained earlier stays usable after [`PasscodeGate::lock`];
/// hosts drop their handles when they lock.
#[derive(Debug, uniffi::Object)]
pub struct SecureStore {
    gate: Arc<PasscodeGate>,
    passwords: Arc<PasswordVault>,
    images: Arc<ImageVault>,
}

impl SecureStore {
    fn ensure_unlocked(&self) -> Result<(), SecureStoreError> {
        if self.gate.can_access_protected()? {
            Ok(())
        } else {
            Err(SecureStoreError::Locked)
        }
    }
}

#[uniffi::export]
impl SecureStore {
    /// Opens the store over the host's preference store and biometrics.
    ///
    /// # Errors
    ///
    /// Returns an error if the passcode digest cannot be read.
    #[uniffi::constructor]
    pub fn new(
        preferences: Arc<dyn PreferenceStore>,
        biometric: Arc<dyn BiometricAuthenticator>,
        config: StoreConfig,
    ) -> Result<Arc<Self>, SecureStoreError> {
        let gate = PasscodeGate::new(Arc::clone(&preferences), biometric)?;
        let passwords = PasswordVault::new(Arc::clone(&preferences), config.clone());
        let images = ImageVault::new(preferences, config);
        log::debug!("secure store opened");
        Ok(Arc::new(Self {
            gate,
            passwords,
            images,
        }))
    }

    /// Returns the passcode gate.
    #[must_use]
    pub fn gate(&self) -> Arc<PasscodeGate> {
        Arc::clone(&self.gate)
    }

    /// Returns the password vault.
    ///
    /// # Errors
    ///
    /// Returns [`SecureStoreError::Locked`] unless the gate permits protected
    /// content.
    pub fn passwords(&self) -> Result<Arc<PasswordVault>, SecureStoreError> {
        self.ensure_unlocked()?;
        Ok(Arc::clone(&self.passwords))
    }

    /// Returns the image vault.
    ///
    /// # Errors
    ///
    /// Returns [`SecureStoreError::Locked`] unless the gate permits protected
    /// content.
    pub fn images(&self) -> Result<Arc<ImageVault>, SecureStoreError> {
        self.ensure_unlocked()?;
        Ok(Arc::clone(&self.images))
    }

    /// Generates a random password without storing it.
    ///
    /// # Errors
    ///
    /// Returns an error if `options` select no characters or an unsupported
    /// length.
    pub fn generate_password(&self, options: PasswordOptions) -> Result<String, SecureStoreError> {
        Ok(generator::generate_password(options)?)
    }

    /// Generates a password and saves it to the password vault.
    ///
    /// # Errors
    ///
    /// Returns [`SecureStoreError::Locked`] if the gate is locked, or a
    /// generator or store error.
    pub fn generate_and_save_password(
        &self,
        options: PasswordOptions,
    ) -> Result<PasswordEntry, SecureStoreError> {
        let vault = self.passwords()?;
        let password = generator::generate_password(options)?;
        Ok(vault.add_generated(password)?)
    }
}
