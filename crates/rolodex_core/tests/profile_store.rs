use rolodex_core::{
    sample_profiles, MemoryProfileRepository, Profile, ProfileKey, ProfileRepository,
};
use std::sync::Arc;
use std::thread;

#[test]
fn upsert_then_find_returns_stored_record() {
    let store = MemoryProfileRepository::new();
    let stored = profile("npub1", "alice");
    store.upsert(stored.clone());

    assert_eq!(store.find(&ProfileKey::new("npub1")), Some(stored));
    assert_eq!(store.len(), 1);
}

#[test]
fn upsert_under_existing_key_replaces_whole_record() {
    let store = MemoryProfileRepository::new();
    store.upsert(profile("npub1", "alice"));

    let mut replacement = profile("npub1", "alicia");
    replacement.phone = Some("000-1".to_string());
    store.upsert(replacement.clone());

    assert_eq!(store.len(), 1);
    assert_eq!(store.find(&ProfileKey::new("npub1")), Some(replacement));
}

#[test]
fn find_absent_key_returns_none() {
    let store = MemoryProfileRepository::new();
    store.upsert(profile("npub1", "alice"));

    assert_eq!(store.find(&ProfileKey::new("ghost")), None);
}

#[test]
fn delete_reports_presence_and_is_idempotent() {
    let store = MemoryProfileRepository::new();
    let key = ProfileKey::new("npub1");
    store.upsert(profile("npub1", "alice"));

    assert!(store.delete(&key));
    assert!(!store.delete(&key));
    assert!(store.is_empty());
}

#[test]
fn delete_many_skips_absent_keys() {
    let store = MemoryProfileRepository::with_profiles(sample_profiles(3));
    let keys = [
        ProfileKey::new("npub0"),
        ProfileKey::new("npub2"),
        ProfileKey::new("ghost"),
    ];

    assert_eq!(store.delete_many(&keys), 2);
    assert_eq!(store.len(), 1);
    assert!(store.find(&ProfileKey::new("npub1")).is_some());
}

#[test]
fn delete_many_with_no_keys_changes_nothing() {
    let store = MemoryProfileRepository::with_profiles(sample_profiles(2));

    assert_eq!(store.delete_many(&[]), 0);
    assert_eq!(store.len(), 2);
}

#[test]
fn list_all_orders_keys_numerically() {
    let store = MemoryProfileRepository::new();
    store.upsert(profile("npub10", "j"));
    store.upsert(profile("npub2", "b"));
    store.upsert(profile("npub1", "a"));

    let keys: Vec<String> = store
        .list_all()
        .into_iter()
        .map(|p| p.key.as_str().to_string())
        .collect();
    assert_eq!(keys, ["npub1", "npub2", "npub10"]);
}

#[test]
fn list_all_is_deterministic_across_calls() {
    let store = MemoryProfileRepository::with_profiles(sample_profiles(15).into_iter().rev());

    let first = store.list_all();
    let second = store.list_all();
    assert_eq!(first, second);
    assert_eq!(first.len(), 15);
    assert_eq!(first[0].key.as_str(), "npub0");
    assert_eq!(first[14].key.as_str(), "npub14");
}

#[test]
fn search_matches_case_sensitive_substring() {
    let store = MemoryProfileRepository::new();
    store.upsert(profile("npub1", "alice"));
    store.upsert(profile("npub2", "Alice"));
    store.upsert(profile("npub3", "malice"));

    let names: Vec<String> = store
        .search_by_name("alice")
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, ["alice", "malice"]);
}

#[test]
fn search_with_empty_query_matches_nothing() {
    let store = MemoryProfileRepository::with_profiles(sample_profiles(5));

    assert!(store.search_by_name("").is_empty());
}

#[test]
fn search_without_match_returns_empty() {
    let store = MemoryProfileRepository::with_profiles(sample_profiles(5));

    assert!(store.search_by_name("bob").is_empty());
}

#[test]
fn search_returns_seeded_hits_in_listing_order() {
    let store = MemoryProfileRepository::with_profiles(sample_profiles(22));

    let names: Vec<String> = store
        .search_by_name("alice1")
        .into_iter()
        .map(|p| p.name)
        .collect();

    let mut expected = vec!["alice1".to_string()];
    expected.extend((10..=19).map(|i| format!("alice{i}")));
    assert_eq!(names, expected);
}

#[test]
fn concurrent_writers_never_corrupt_the_map() {
    let store = Arc::new(MemoryProfileRepository::new());

    let mut writers = Vec::new();
    for worker in 0..8u32 {
        let store = Arc::clone(&store);
        writers.push(thread::spawn(move || {
            for i in 0..50u32 {
                let n = worker * 50 + i;
                store.upsert(profile(&format!("npub{n}"), &format!("alice{n}")));
            }
        }));
    }

    let reader = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for _ in 0..100 {
                let snapshot = store.list_all();
                assert!(snapshot.windows(2).all(|pair| pair[0].key < pair[1].key));
            }
        })
    };

    for handle in writers {
        handle.join().unwrap();
    }
    reader.join().unwrap();

    assert_eq!(store.len(), 400);
    let listed = store.list_all();
    assert!(listed.windows(2).all(|pair| pair[0].key < pair[1].key));
}

fn profile(key: &str, name: &str) -> Profile {
    Profile::new(key, name, format!("{name}@example.com"))
}
