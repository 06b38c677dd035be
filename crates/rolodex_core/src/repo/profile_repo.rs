//! Profile store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and query APIs over the canonical record map.
//! - Keep locking details inside the storage boundary.
//!
//! # Invariants
//! - Exactly one record per key; a write under an existing key replaces
//!   the whole record.
//! - One lock guards the map; every operation acquires it once and releases
//!   it before returning.
//! - Listings and search results come back in ascending key order.

use crate::model::profile::{Profile, ProfileKey};
use log::info;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Store interface for directory records.
///
/// All operations are infallible: lookups report absence through `Option`,
/// deletions through their return value. Implementations must be shareable
/// across threads, with each call serialized internally.
pub trait ProfileRepository: Send + Sync {
    /// Inserts `profile`, replacing any record stored under the same key.
    fn upsert(&self, profile: Profile);
    /// Returns a clone of the record under `key`, or `None`.
    fn find(&self, key: &ProfileKey) -> Option<Profile>;
    /// Removes the record under `key`. Returns whether a record existed;
    /// deleting an absent key is a no-op.
    fn delete(&self, key: &ProfileKey) -> bool;
    /// Removes every listed key in one pass and returns how many records
    /// actually existed. Absent keys are skipped.
    fn delete_many(&self, keys: &[ProfileKey]) -> usize;
    /// Returns all records in ascending key order.
    fn list_all(&self) -> Vec<Profile>;
    /// Returns records whose name contains `query` as a case-sensitive
    /// substring, in ascending key order. An empty query matches nothing.
    fn search_by_name(&self, query: &str) -> Vec<Profile>;
    /// Number of stored records.
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-local store backed by an ordered map behind one mutex.
pub struct MemoryProfileRepository {
    profiles: Mutex<BTreeMap<ProfileKey, Profile>>,
}

impl MemoryProfileRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            profiles: Mutex::new(BTreeMap::new()),
        }
    }

    /// Creates a store preloaded with `profiles`. Later entries under a
    /// duplicate key replace earlier ones, matching `upsert`.
    pub fn with_profiles(profiles: impl IntoIterator<Item = Profile>) -> Self {
        let store = Self::new();
        {
            let mut map = store.guard();
            for profile in profiles {
                map.insert(profile.key.clone(), profile);
            }
            info!(
                "event=store_seed module=repo status=ok records={}",
                map.len()
            );
        }
        store
    }

    /// Acquires the map lock. A poisoned lock is recovered: the map never
    /// holds partially applied writes, so the data is still consistent.
    fn guard(&self) -> MutexGuard<'_, BTreeMap<ProfileKey, Profile>> {
        self.profiles.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileRepository for MemoryProfileRepository {
    fn upsert(&self, profile: Profile) {
        let mut map = self.guard();
        map.insert(profile.key.clone(), profile);
    }

    fn find(&self, key: &ProfileKey) -> Option<Profile> {
        self.guard().get(key).cloned()
    }

    fn delete(&self, key: &ProfileKey) -> bool {
        self.guard().remove(key).is_some()
    }

    fn delete_many(&self, keys: &[ProfileKey]) -> usize {
        let mut map = self.guard();
        keys.iter().filter(|key| map.remove(*key).is_some()).count()
    }

    fn list_all(&self) -> Vec<Profile> {
        self.guard().values().cloned().collect()
    }

    fn search_by_name(&self, query: &str) -> Vec<Profile> {
        if query.is_empty() {
            return Vec::new();
        }

        self.guard()
            .values()
            .filter(|profile| profile.name.contains(query))
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.guard().len()
    }
}
