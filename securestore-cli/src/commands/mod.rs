pub mod generate;
pub mod images;
pub mod passcode;
pub mod passwords;

use std::path::Path;
use std::sync::Arc;

use chrono::DateTime;
use securestore_core::{
    DecodePolicy, FilePreferenceStore, GateState, SecureStore, StoreConfig,
};

use crate::terminal::TerminalConfirmation;

/// One CLI launch: the opened store plus the passcode given on the command line.
pub struct Session {
    store: Arc<SecureStore>,
    passcode: Option<String>,
}

impl Session {
    pub fn launch(
        root: &Path,
        decode_policy: DecodePolicy,
        passcode: Option<String>,
    ) -> eyre::Result<Self> {
        let preferences = Arc::new(FilePreferenceStore::open(root)?);
        tracing::debug!(dir = %preferences.dir().display(), "opened preference store");
        let store = SecureStore::new(
            preferences,
            Arc::new(TerminalConfirmation),
            StoreConfig { decode_policy },
        )?;
        Ok(Self { store, passcode })
    }

    pub const fn store(&self) -> &Arc<SecureStore> {
        &self.store
    }

    /// Verifies `--passcode` if the gate is locked.
    ///
    /// Protected content stays closed until a passcode exists.
    pub fn unlock(&self) -> eyre::Result<()> {
        let gate = self.store.gate();
        match gate.state()? {
            GateState::Locked => {}
            GateState::NoPasscode => {
                eyre::bail!("no passcode configured; run `passcode set` first");
            }
            GateState::Unlocked | GateState::Authenticated => return Ok(()),
        }
        let Some(passcode) = self.passcode.clone() else {
            eyre::bail!("a passcode is set; pass --passcode or SECURESTORE_PASSCODE");
        };
        if !gate.verify(passcode)? {
            eyre::bail!("incorrect passcode");
        }
        Ok(())
    }
}

pub fn format_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map_or_else(|| millis.to_string(), |date| date.to_rfc3339())
}
