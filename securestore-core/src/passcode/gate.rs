use std::sync::{Arc, Mutex, MutexGuard};

use super::digest::PasscodeDigest;
use super::state::{GateState, PasscodeState};
use crate::biometric::{self, BiometricAuthenticator};
use crate::error::GateError;
use crate::preferences::{PreferenceStore, PASSCODE_DIGEST_KEY};

/// Prompt shown by the biometric passcode reset.
pub const RESET_PROMPT: &str = "Authenticate to reset your passcode";

/// Local passcode gate backed by the preference store.
#[derive(uniffi::Object)]
pub struct PasscodeGate {
    preferences: Arc<dyn PreferenceStore>,
    biometric: Arc<dyn BiometricAuthenticator>,
    state: Mutex<PasscodeState>,
}

impl std::fmt::Debug for PasscodeGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasscodeGate").finish_non_exhaustive()
    }
}

impl PasscodeGate {
    /// Creates a gate, reading the configured digest from `preferences`.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference store cannot be read.
    pub fn open(
        preferences: Arc<dyn PreferenceStore>,
        biometric: Arc<dyn BiometricAuthenticator>,
    ) -> Result<Self, GateError> {
        let digest = preferences
            .get(PASSCODE_DIGEST_KEY.to_string())?
            .map(|bytes| PasscodeDigest::from_stored(&String::from_utf8_lossy(&bytes)));
        let state = PasscodeState::at_launch(digest);
        log::debug!("passcode gate opened in state {}", state.phase());
        Ok(Self {
            preferences,
            biometric,
            state: Mutex::new(state),
        })
    }

    /// Returns a copy of the current state.
    ///
    /// # Errors
    ///
    /// Returns an error if the state mutex is poisoned.
    pub fn snapshot(&self) -> Result<PasscodeState, GateError> {
        Ok(self.lock_state()?.clone())
    }

    fn lock_state(&self) -> Result<MutexGuard<'_, PasscodeState>, GateError> {
        self.state
            .lock()
            .map_err(|_| GateError::Preferences("gate state mutex poisoned".to_string()))
    }

    fn transition(
        &self,
        next: impl FnOnce(PasscodeState) -> PasscodeState,
    ) -> Result<GateState, GateError> {
        let mut state = self.lock_state()?;
        let from = state.phase();
        *state = next(state.clone());
        let to = state.phase();
        if from != to {
            log::info!("passcode gate {from} -> {to}");
        }
        Ok(to)
    }
}

#[uniffi::export]
impl PasscodeGate {
    /// Creates a gate, reading the configured digest from `preferences`.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference store cannot be read.
    #[uniffi::constructor]
    pub fn new(
        preferences: Arc<dyn PreferenceStore>,
        biometric: Arc<dyn BiometricAuthenticator>,
    ) -> Result<Arc<Self>, GateError> {
        Self::open(preferences, biometric).map(Arc::new)
    }

    /// Returns the current phase.
    ///
    /// # Errors
    ///
    /// Returns an error if the state mutex is poisoned.
    pub fn state(&self) -> Result<GateState, GateError> {
        Ok(self.lock_state()?.phase())
    }

    /// Returns `true` if a passcode is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the state mutex is poisoned.
    pub fn is_passcode_set(&self) -> Result<bool, GateError> {
        Ok(self.lock_state()?.has_passcode())
    }

    /// Returns `true` if protected content may be shown.
    ///
    /// # Errors
    ///
    /// Returns an error if the state mutex is poisoned.
    pub fn can_access_protected(&self) -> Result<bool, GateError> {
        Ok(self.lock_state()?.can_access())
    }

    /// Stores `raw` as the passcode, replacing any prior one, and unlocks.
    ///
    /// The gate ends in [`GateState::Unlocked`], also when the session was
    /// authenticated against the previous passcode.
    ///
    /// # Errors
    ///
    /// - [`GateError::EmptyInput`] if `raw` is empty.
    /// - [`GateError::Locked`] if a passcode is configured and has not been
    ///   verified this session.
    /// - [`GateError::Preferences`] if the digest cannot be written.
    pub fn set_passcode(&self, raw: String) -> Result<(), GateError> {
        if raw.is_empty() {
            return Err(GateError::EmptyInput);
        }
        let mut state = self.lock_state()?;
        if state.phase() == GateState::Locked {
            return Err(GateError::Locked);
        }
        let digest = PasscodeDigest::of_secret(raw);
        self.preferences.set(
            PASSCODE_DIGEST_KEY.to_string(),
            digest.as_hex().as_bytes().to_vec(),
        )?;
        let from = state.phase();
        *state = state.clone().with_passcode(digest);
        log::info!("passcode set ({from} -> {})", state.phase());
        Ok(())
    }

    /// Checks `raw` against the configured passcode.
    ///
    /// Returns `false` when no passcode is configured or it does not match;
    /// attempts are not limited. A match authenticates the session.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::EmptyInput`] if `raw` is empty.
    pub fn verify(&self, raw: String) -> Result<bool, GateError> {
        if raw.is_empty() {
            return Err(GateError::EmptyInput);
        }
        let candidate = PasscodeDigest::of_secret(raw);
        let mut state = self.lock_state()?;
        let matched = state
            .digest()
            .is_some_and(|stored| stored.matches(&candidate));
        if matched {
            let from = state.phase();
            *state = state.clone().authenticated();
            log::info!("passcode verified ({from} -> {})", state.phase());
        } else {
            log::info!("passcode verification failed");
        }
        Ok(matched)
    }

    /// Erases the passcode after a successful biometric challenge and unlocks.
    ///
    /// The next [`Self::set_passcode`] behaves as if no passcode had ever been
    /// set.
    ///
    /// # Errors
    ///
    /// - [`GateError::BiometricUnavailable`] if the device has no biometrics.
    /// - [`GateError::BiometricDenied`] if the challenge fails or is cancelled.
    /// - [`GateError::Preferences`] if the digest cannot be erased.
    pub async fn reset_via_biometric(&self) -> Result<(), GateError> {
        biometric::challenge(self.biometric.as_ref(), RESET_PROMPT).await?;
        self.preferences.remove(PASSCODE_DIGEST_KEY.to_string())?;
        self.transition(PasscodeState::reset)?;
        Ok(())
    }

    /// Locks the gate and ends the session's authentication.
    ///
    /// # Errors
    ///
    /// Returns an error if the state mutex is poisoned.
    pub fn lock(&self) -> Result<GateState, GateError> {
        self.transition(PasscodeState::locked)
    }
}
