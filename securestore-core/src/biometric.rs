//! Device biometric authentication.

use std::sync::Arc;

use crate::error::GateError;

/// Prompt shown when the app asks for biometrics at launch.
pub const APP_ENTRY_PROMPT: &str = "Authenticate to access the app";

/// Biometric authentication provided by the host platform.
///
/// # Platform Implementations
///
/// - **iOS**: `LAContext` with `.deviceOwnerAuthenticationWithBiometrics`
/// - **Android**: `BiometricPrompt` with `BIOMETRIC_STRONG`
///
/// ## Swift
///
/// ```swift
/// final class FaceIdAuthenticator: BiometricAuthenticator {
///     func isAvailable() -> Bool {
///         LAContext().canEvaluatePolicy(.deviceOwnerAuthenticationWithBiometrics, error: nil)
///     }
///
///     func authenticate(reason: String) async -> Bool {
///         (try? await LAContext().evaluatePolicy(
///             .deviceOwnerAuthenticationWithBiometrics,
///             localizedReason: reason
///         )) ?? false
///     }
/// }
/// ```
#[uniffi::export(with_foreign)]
#[async_trait::async_trait]
pub trait BiometricAuthenticator: Send + Sync {
    /// Returns `true` if the device can evaluate a biometric challenge.
    fn is_available(&self) -> bool;

    /// Presents a biometric challenge with the user-facing `reason`.
    ///
    /// Resolves to `true` on success and `false` on failure or cancellation.
    async fn authenticate(&self, reason: String) -> bool;
}

/// Runs one biometric challenge.
pub(crate) async fn challenge(
    authenticator: &dyn BiometricAuthenticator,
    reason: &str,
) -> Result<(), GateError> {
    if !authenticator.is_available() {
        log::info!("biometric challenge skipped: capability unavailable");
        return Err(GateError::BiometricUnavailable);
    }
    if authenticator.authenticate(reason.to_string()).await {
        Ok(())
    } else {
        log::info!("biometric challenge denied");
        Err(GateError::BiometricDenied)
    }
}

/// Asks for biometrics before the app shows its home screen.
///
/// This prompt is independent of the passcode gate and changes no state.
///
/// # Errors
///
/// Returns [`GateError::BiometricUnavailable`] if the device has no
/// biometrics and [`GateError::BiometricDenied`] if the challenge fails.
#[uniffi::export]
pub async fn authenticate_app_entry(
    authenticator: Arc<dyn BiometricAuthenticator>,
) -> Result<(), GateError> {
    challenge(authenticator.as_ref(), APP_ENTRY_PROMPT).await
}
