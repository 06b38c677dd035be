//! Directory use-case service.
//!
//! # Responsibility
//! - Provide save/lookup/remove/browse/search entry points for callers.
//! - Run the shape checks the store itself deliberately skips.
//! - Normalize collaborator input before it reaches storage.
//!
//! # Invariants
//! - A rejected draft leaves the store untouched.
//! - Saving reuses full-record replacement; the service never merges
//!   fields into an existing record.
//! - Browse and search windows come from the same page selector, so both
//!   share clamping and ordering behavior.

use crate::model::profile::{is_well_formed_email, Profile, ProfileKey};
use crate::page::{select_page, PageWindow};
use crate::repo::profile_repo::ProfileRepository;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for directory use-cases.
///
/// Only collaborator input can fail; once a draft passes its shape checks,
/// every store interaction succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// Draft key is empty after trimming.
    BlankKey,
    /// Draft email is non-empty but not address-shaped.
    InvalidEmail(String),
}

impl Display for DirectoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankKey => write!(f, "profile key must not be blank"),
            Self::InvalidEmail(value) => write!(f, "invalid email address: `{value}`"),
        }
    }
}

impl Error for DirectoryError {}

/// Request model for saving one record, as collected from a form or CLI.
///
/// Fields arrive raw; the service trims them and decides whether the draft
/// becomes a stored `Profile`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileDraft {
    /// Unique key the record is stored under.
    pub key: String,
    /// Display name. May be empty; search simply never matches it.
    pub name: String,
    /// Contact address. Empty means "no address on file".
    pub email: String,
    /// Optional free-form phone number.
    pub phone: Option<String>,
}

/// Use-case facade over a record store.
pub struct DirectoryService<R: ProfileRepository> {
    repo: R,
}

impl<R: ProfileRepository> DirectoryService<R> {
    /// Creates a service using the provided store implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates a draft and stores it, replacing any record under the
    /// same key.
    ///
    /// # Contract
    /// - Key: trimmed, must be non-empty.
    /// - Email: trimmed; empty is accepted, otherwise it must look like
    ///   an address.
    /// - Returns the record exactly as stored.
    pub fn save_profile(&self, draft: ProfileDraft) -> Result<Profile, DirectoryError> {
        let key = draft.key.trim();
        if key.is_empty() {
            warn!("event=profile_save module=service status=rejected reason=blank_key");
            return Err(DirectoryError::BlankKey);
        }

        let email = draft.email.trim().to_string();
        if !email.is_empty() && !is_well_formed_email(&email) {
            warn!("event=profile_save module=service status=rejected reason=bad_email key={key}");
            return Err(DirectoryError::InvalidEmail(email));
        }

        let profile = Profile {
            key: ProfileKey::new(key),
            name: draft.name.trim().to_string(),
            email,
            phone: normalize_optional(draft.phone),
        };
        self.repo.upsert(profile.clone());
        debug!(
            "event=profile_save module=service status=ok key={}",
            profile.key
        );
        Ok(profile)
    }

    /// Gets one record by key. Absence is a normal outcome.
    pub fn profile(&self, key: &ProfileKey) -> Option<Profile> {
        self.repo.find(key)
    }

    /// Removes one record by key. Returns whether a record existed.
    pub fn remove(&self, key: &ProfileKey) -> bool {
        let existed = self.repo.delete(key);
        debug!("event=profile_delete module=service status=ok key={key} existed={existed}");
        existed
    }

    /// Removes every listed key and returns how many records existed.
    pub fn remove_many(&self, keys: &[ProfileKey]) -> usize {
        let removed = self.repo.delete_many(keys);
        info!(
            "event=profile_bulk_delete module=service status=ok requested={} removed={removed}",
            keys.len()
        );
        removed
    }

    /// Returns one page of the full listing, in ascending key order.
    pub fn browse(&self, page: i64) -> PageWindow<Profile> {
        select_page(&self.repo.list_all(), page)
    }

    /// Returns one page of records whose name contains `query`.
    ///
    /// Matching is case-sensitive and an empty query yields an empty
    /// window, mirroring the store contract.
    pub fn search(&self, query: &str, page: i64) -> PageWindow<Profile> {
        select_page(&self.repo.search_by_name(query), page)
    }

    /// Number of records currently stored.
    pub fn record_count(&self) -> usize {
        self.repo.len()
    }
}

/// Trims an optional field and drops it entirely when blank.
fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}
