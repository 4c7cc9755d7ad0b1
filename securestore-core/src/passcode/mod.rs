//! Passcode gate.
//!
//! The gate decides whether protected content may be shown. It keeps one
//! explicit [`PasscodeState`] value; every operation derives the next state
//! from the current one.

mod digest;
mod gate;
mod state;

pub use digest::PasscodeDigest;
pub use gate::{PasscodeGate, RESET_PROMPT};
pub use state::{GateState, PasscodeState};

#[cfg(test)]
mod tests;
