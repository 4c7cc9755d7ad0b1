use std::sync::Arc;

use chrono::{TimeZone, Utc};
use test_case::test_case;
use uuid::Uuid;

use super::*;
use crate::error::StoreError;
use crate::preferences::{MemoryPreferenceStore, PreferenceStore, IMAGES_KEY, PASSWORDS_KEY};
use crate::records::{CredentialRecord, MediaRecord};

fn password_store(preferences: &Arc<MemoryPreferenceStore>) -> RecordStore<CredentialRecord> {
    RecordStore::new(preferences.clone(), StoreConfig::default())
}

fn sample(name: &str) -> CredentialRecord {
    CredentialRecord::new(name, "alice", "hunter2", "")
}

#[test]
fn test_empty_when_nothing_persisted() {
    let preferences = MemoryPreferenceStore::new();
    let store = password_store(&preferences);
    assert!(store.load_all().expect("load").is_empty());
}

#[test]
fn test_bank_scenario() {
    let preferences = MemoryPreferenceStore::new();
    let store = password_store(&preferences);
    let t1 = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let record = CredentialRecord::with_date("Bank", "alice", "x1", "", t1);

    store.add(record.clone()).expect("add");
    assert_eq!(store.load_all().expect("load"), vec![record.clone()]);

    store.remove(record.id).expect("remove");
    assert!(store.load_all().expect("load").is_empty());
}

#[test]
fn test_survives_fresh_store_in_insertion_order() {
    let preferences = MemoryPreferenceStore::new();
    let first = sample("one");
    let second = sample("two");
    let third = sample("three");
    {
        let store = password_store(&preferences);
        store.add(first.clone()).expect("add");
        store.add(second.clone()).expect("add");
        store.add(third.clone()).expect("add");
        store.remove(second.id).expect("remove");
    }

    let reopened = password_store(&preferences);
    assert_eq!(reopened.load_all().expect("load"), vec![first, third]);
}

#[test]
fn test_duplicate_content_is_kept() {
    let preferences = MemoryPreferenceStore::new();
    let store = password_store(&preferences);
    let a = sample("same");
    let mut b = a.clone();
    b.id = Uuid::new_v4();

    store.add(a).expect("add");
    store.add(b).expect("add");
    assert_eq!(store.load_all().expect("load").len(), 2);
}

#[test]
fn test_remove_absent_is_noop() {
    let preferences = MemoryPreferenceStore::new();
    let store = password_store(&preferences);
    let record = sample("kept");
    store.add(record.clone()).expect("add");

    store.remove(Uuid::new_v4()).expect("remove absent");
    assert_eq!(store.load_all().expect("load"), vec![record]);
}

#[test]
fn test_load_is_idempotent() {
    let preferences = MemoryPreferenceStore::new();
    let store = password_store(&preferences);
    store.add(sample("a")).expect("add");
    store.add(sample("b")).expect("add");

    let first = store.load_all().expect("load");
    let second = store.load_all().expect("load");
    assert_eq!(first, second);
}

#[test]
fn test_update_replaces_image_content() {
    let preferences = MemoryPreferenceStore::new();
    let store: RecordStore<MediaRecord> =
        RecordStore::new(preferences.clone(), StoreConfig::default());
    let original = MediaRecord::new(vec![1, 2, 3], "Personal");
    let other = MediaRecord::new(vec![9], "Personal");
    store.add(original.clone()).expect("add");
    store.add(other.clone()).expect("add");

    store
        .update(original.id, |record| record.with_content(vec![4, 5]))
        .expect("update");

    let loaded = store.load_all().expect("load");
    assert_eq!(loaded[0].id, original.id);
    assert_eq!(loaded[0].image_data, vec![4, 5]);
    assert_eq!(loaded[1], other);
}

#[test]
fn test_update_absent_is_noop() {
    let preferences = MemoryPreferenceStore::new();
    let store: RecordStore<MediaRecord> =
        RecordStore::new(preferences.clone(), StoreConfig::default());
    store
        .update(Uuid::new_v4(), |record| record.with_content(vec![0]))
        .expect("update absent");
    assert_eq!(preferences.get(IMAGES_KEY.to_string()).expect("get"), None);
}

#[test]
fn test_kinds_use_separate_keys() {
    let preferences = MemoryPreferenceStore::new();
    let passwords = password_store(&preferences);
    let images: RecordStore<MediaRecord> =
        RecordStore::new(preferences.clone(), StoreConfig::default());

    passwords.add(sample("a")).expect("add");
    images.add(MediaRecord::new(vec![7], "")).expect("add");

    assert!(preferences.get(PASSWORDS_KEY.to_string()).expect("get").is_some());
    assert!(preferences.get(IMAGES_KEY.to_string()).expect("get").is_some());
    assert_eq!(passwords.load_all().expect("load").len(), 1);
    assert_eq!(images.load_all().expect("load").len(), 1);
}

#[test_case(DecodePolicy::DefaultEmpty ; "default empty")]
#[test_case(DecodePolicy::Propagate ; "propagate")]
fn test_corrupt_collection(policy: DecodePolicy) {
    let preferences = MemoryPreferenceStore::new();
    preferences
        .set(PASSWORDS_KEY.to_string(), b"{not json".to_vec())
        .expect("seed");
    let store: RecordStore<CredentialRecord> = RecordStore::new(
        preferences.clone(),
        StoreConfig {
            decode_policy: policy,
        },
    );

    match policy {
        DecodePolicy::DefaultEmpty => {
            assert!(store.load_all().expect("load").is_empty());
        }
        DecodePolicy::Propagate => {
            let err = store.load_all().expect_err("corrupt blob");
            assert!(matches!(err, StoreError::Deserialization(_)));
            let err = store.add(sample("a")).expect_err("add over corrupt blob");
            assert!(matches!(err, StoreError::Deserialization(_)));
            assert_eq!(
                preferences.get(PASSWORDS_KEY.to_string()).expect("get"),
                Some(b"{not json".to_vec())
            );
        }
    }
}

#[test]
fn test_clear_removes_blob() {
    let preferences = MemoryPreferenceStore::new();
    let store = password_store(&preferences);
    store.add(sample("a")).expect("add");
    store.clear().expect("clear");
    assert_eq!(preferences.get(PASSWORDS_KEY.to_string()).expect("get"), None);
    assert!(store.load_all().expect("load").is_empty());
}

#[test]
fn test_decode_policy_parses_from_kebab_case() {
    assert_eq!(
        "default-empty".parse::<DecodePolicy>().expect("parse"),
        DecodePolicy::DefaultEmpty
    );
    assert_eq!(
        "propagate".parse::<DecodePolicy>().expect("parse"),
        DecodePolicy::Propagate
    );
    assert_eq!(DecodePolicy::Propagate.to_string(), "propagate");
}

#[test]
fn test_concurrent_adds_are_not_lost() {
    let preferences = MemoryPreferenceStore::new();
    let store = Arc::new(password_store(&preferences));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                store.add(sample(&format!("site-{i}"))).expect("add");
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("join");
    }

    assert_eq!(store.load_all().expect("load").len(), 8);
}
