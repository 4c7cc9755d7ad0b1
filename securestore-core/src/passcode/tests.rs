use std::sync::Arc;

use test_case::test_case;

use super::*;
use crate::error::GateError;
use crate::preferences::{MemoryPreferenceStore, PreferenceStore, PASSCODE_DIGEST_KEY};
use crate::test_support::StubBiometric;

fn gate_with(
    preferences: &Arc<MemoryPreferenceStore>,
    biometric: Arc<StubBiometric>,
) -> PasscodeGate {
    PasscodeGate::open(preferences.clone(), biometric).expect("open gate")
}

fn fresh_gate() -> (Arc<MemoryPreferenceStore>, PasscodeGate) {
    let preferences = MemoryPreferenceStore::new();
    let gate = gate_with(&preferences, StubBiometric::approving());
    (preferences, gate)
}

#[test]
fn test_starts_without_passcode() {
    let (_, gate) = fresh_gate();
    assert_eq!(gate.state().unwrap(), GateState::NoPasscode);
    assert!(!gate.is_passcode_set().unwrap());
    assert!(!gate.can_access_protected().unwrap());
}

#[test_case("1234" ; "digits")]
#[test_case("correct horse battery staple" ; "spaces")]
#[test_case("pässwörd🔒" ; "non ascii")]
fn test_verify_after_set(passcode: &str) {
    let (_, gate) = fresh_gate();
    gate.set_passcode(passcode.to_string()).expect("set");
    assert_eq!(gate.state().unwrap(), GateState::Unlocked);
    assert!(gate.verify(passcode.to_string()).expect("verify"));
    assert_eq!(gate.state().unwrap(), GateState::Authenticated);
}

#[test]
fn test_wrong_passcode_is_false_and_retriable() {
    let (preferences, gate) = fresh_gate();
    gate.set_passcode("1234".to_string()).expect("set");

    let relaunched = gate_with(&preferences, StubBiometric::approving());
    assert_eq!(relaunched.state().unwrap(), GateState::Locked);
    for _ in 0..20 {
        assert!(!relaunched.verify("4321".to_string()).expect("verify"));
        assert_eq!(relaunched.state().unwrap(), GateState::Locked);
    }
    assert!(relaunched.verify("1234".to_string()).expect("verify"));
    assert!(relaunched.can_access_protected().unwrap());
}

#[test]
fn test_empty_input_rejected() {
    let (_, gate) = fresh_gate();
    assert_eq!(gate.set_passcode(String::new()), Err(GateError::EmptyInput));
    assert_eq!(gate.verify(String::new()), Err(GateError::EmptyInput));
    assert_eq!(gate.state().unwrap(), GateState::NoPasscode);
}

#[test]
fn test_verify_without_passcode_is_false() {
    let (_, gate) = fresh_gate();
    assert!(!gate.verify("1234".to_string()).expect("verify"));
    assert_eq!(gate.state().unwrap(), GateState::NoPasscode);
}

#[test]
fn test_digest_is_persisted_as_hex() {
    let (preferences, gate) = fresh_gate();
    gate.set_passcode("abc".to_string()).expect("set");
    let stored = preferences
        .get(PASSCODE_DIGEST_KEY.to_string())
        .unwrap()
        .expect("digest stored");
    assert_eq!(
        String::from_utf8(stored).unwrap(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_set_replaces_prior_passcode() {
    let (preferences, gate) = fresh_gate();
    gate.set_passcode("first".to_string()).expect("set");
    gate.set_passcode("second".to_string()).expect("replace");

    let relaunched = gate_with(&preferences, StubBiometric::approving());
    assert!(!relaunched.verify("first".to_string()).unwrap());
    assert!(relaunched.verify("second".to_string()).unwrap());
}

#[test]
fn test_set_while_locked_is_rejected() {
    let (preferences, gate) = fresh_gate();
    gate.set_passcode("1234".to_string()).expect("set");

    let relaunched = gate_with(&preferences, StubBiometric::approving());
    assert_eq!(
        relaunched.set_passcode("0000".to_string()),
        Err(GateError::Locked)
    );
    assert!(relaunched.verify("1234".to_string()).unwrap());
    relaunched.set_passcode("0000".to_string()).expect("change after verify");
}

#[test]
fn test_replacing_passcode_ends_authentication() {
    let (_, gate) = fresh_gate();
    gate.set_passcode("1234".to_string()).expect("set");
    assert!(gate.verify("1234".to_string()).unwrap());
    assert_eq!(gate.state().unwrap(), GateState::Authenticated);

    gate.set_passcode("5678".to_string()).expect("replace");
    assert_eq!(gate.state().unwrap(), GateState::Unlocked);
    assert!(gate.can_access_protected().unwrap());
    assert!(gate.verify("5678".to_string()).unwrap());
    assert_eq!(gate.state().unwrap(), GateState::Authenticated);
}

#[test]
fn test_concurrent_verify_and_lock_settle_consistently() {
    let (preferences, gate) = fresh_gate();
    gate.set_passcode("1234".to_string()).expect("set");
    let gate = Arc::new(gate_with(&preferences, StubBiometric::approving()));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let gate = Arc::clone(&gate);
            std::thread::spawn(move || {
                for _ in 0..50 {
                    if i % 2 == 0 {
                        assert!(gate.verify("1234".to_string()).unwrap());
                    } else {
                        gate.lock().unwrap();
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let state = gate.state().unwrap();
    assert!(matches!(state, GateState::Locked | GateState::Authenticated));
    assert_eq!(
        gate.can_access_protected().unwrap(),
        state == GateState::Authenticated
    );
    assert!(gate.verify("1234".to_string()).unwrap());
    assert_eq!(gate.state().unwrap(), GateState::Authenticated);
}

#[test]
fn test_session_does_not_survive_relaunch() {
    let (preferences, gate) = fresh_gate();
    gate.set_passcode("1234".to_string()).expect("set");
    assert!(gate.verify("1234".to_string()).unwrap());

    let relaunched = gate_with(&preferences, StubBiometric::approving());
    assert_eq!(relaunched.state().unwrap(), GateState::Locked);
    assert!(!relaunched.can_access_protected().unwrap());
}

#[test]
fn test_lock_ends_session() {
    let (_, gate) = fresh_gate();
    gate.set_passcode("1234".to_string()).expect("set");
    assert!(gate.verify("1234".to_string()).unwrap());
    assert_eq!(gate.lock().unwrap(), GateState::Locked);
    assert!(!gate.can_access_protected().unwrap());
}

#[tokio::test]
async fn test_biometric_reset_clears_passcode() {
    let preferences = MemoryPreferenceStore::new();
    gate_with(&preferences, StubBiometric::approving())
        .set_passcode("1234".to_string())
        .expect("set");

    let biometric = StubBiometric::approving();
    let gate = gate_with(&preferences, biometric.clone());
    gate.reset_via_biometric().await.expect("reset");

    assert_eq!(biometric.prompts(), vec![RESET_PROMPT.to_string()]);
    assert_eq!(gate.state().unwrap(), GateState::Unlocked);
    assert!(!gate.is_passcode_set().unwrap());
    assert_eq!(preferences.get(PASSCODE_DIGEST_KEY.to_string()).unwrap(), None);

    gate.set_passcode("5678".to_string()).expect("set after reset");
    assert!(gate.verify("5678".to_string()).unwrap());
    assert!(!gate.verify("1234".to_string()).unwrap());
}

#[test_case(false, false, GateError::BiometricUnavailable ; "unavailable")]
#[test_case(true, false, GateError::BiometricDenied ; "denied")]
fn test_biometric_reset_failures(available: bool, approve: bool, expected: GateError) {
    let runtime = tokio::runtime::Runtime::new().expect("runtime");
    let preferences = MemoryPreferenceStore::new();
    gate_with(&preferences, StubBiometric::approving())
        .set_passcode("1234".to_string())
        .expect("set");

    let biometric = StubBiometric::new(available, approve);
    let gate = gate_with(&preferences, biometric.clone());
    let err = runtime
        .block_on(gate.reset_via_biometric())
        .expect_err("reset must fail");

    assert_eq!(err, expected);
    assert_eq!(gate.state().unwrap(), GateState::Locked);
    assert!(gate.is_passcode_set().unwrap());
    if !available {
        assert!(biometric.prompts().is_empty());
    }
}
