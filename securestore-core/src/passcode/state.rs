use strum::Display;

use super::digest::PasscodeDigest;

/// Observable phase of the passcode gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, uniffi::Enum)]
#[strum(serialize_all = "kebab-case")]
pub enum GateState {
    /// No passcode is configured; the host should offer to set one.
    NoPasscode,
    /// A passcode is configured and has not been presented this session.
    Locked,
    /// Unlocked without presenting the passcode (just set, or reset).
    Unlocked,
    /// The passcode was verified this session.
    Authenticated,
}

/// Passcode gate state.
///
/// `digest` mirrors the persisted value; `locked` and `authenticated` exist
/// only in memory and start as locked / unauthenticated on every launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasscodeState {
    digest: Option<PasscodeDigest>,
    locked: bool,
    authenticated: bool,
}

impl PasscodeState {
    /// State at launch given the persisted digest.
    #[must_use]
    pub const fn at_launch(digest: Option<PasscodeDigest>) -> Self {
        Self {
            digest,
            locked: true,
            authenticated: false,
        }
    }

    /// Returns the configured digest.
    #[must_use]
    pub const fn digest(&self) -> Option<&PasscodeDigest> {
        self.digest.as_ref()
    }

    /// Returns `true` if a passcode is configured.
    #[must_use]
    pub const fn has_passcode(&self) -> bool {
        self.digest.is_some()
    }

    /// Returns `true` if protected content may be shown.
    #[must_use]
    pub const fn can_access(&self) -> bool {
        !self.locked || self.authenticated
    }

    /// Returns the observable phase.
    #[must_use]
    pub const fn phase(&self) -> GateState {
        if self.authenticated {
            GateState::Authenticated
        } else if !self.locked {
            GateState::Unlocked
        } else if self.digest.is_some() {
            GateState::Locked
        } else {
            GateState::NoPasscode
        }
    }

    /// Installs `digest` as the passcode and unlocks.
    ///
    /// A prior session authentication belongs to the replaced passcode and is
    /// dropped.
    #[must_use]
    pub fn with_passcode(self, digest: PasscodeDigest) -> Self {
        Self {
            digest: Some(digest),
            locked: false,
            authenticated: false,
        }
    }

    /// Marks the session authenticated.
    #[must_use]
    pub fn authenticated(self) -> Self {
        Self {
            locked: false,
            authenticated: true,
            ..self
        }
    }

    /// Drops the passcode and unlocks, as after a biometric reset.
    #[must_use]
    pub fn reset(self) -> Self {
        Self {
            digest: None,
            locked: false,
            authenticated: false,
        }
    }

    /// Locks the gate and ends session authentication.
    #[must_use]
    pub fn locked(self) -> Self {
        Self {
            locked: true,
            authenticated: false,
            ..self
        }
    }
}
