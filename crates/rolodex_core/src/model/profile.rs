//! Profile domain model.
//!
//! # Responsibility
//! - Define the canonical directory record and its unique key type.
//! - Own the numeric-aware key ordering used by every listing.
//! - Provide the email shape check used by collaborator-facing layers.
//!
//! # Invariants
//! - `ProfileKey` ordering is total: keys compare by stem, then by numeric
//!   suffix value, then by raw text, so `"id-2"` sorts before `"id-10"`.
//! - Key equality is plain string equality; two keys compare `Equal` only
//!   when their raw text is identical.
//! - The model never validates on construction; shape checks are explicit
//!   calls made by callers before storage.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Permissive address shape: one `@`, non-empty local part, dotted domain,
/// no whitespace. Deliverability is out of scope.
static EMAIL_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email shape regex"));

/// Unique, immutable identifier of one directory record.
///
/// Keys arrive from collaborators (URL segments, form fields) and are stored
/// verbatim. Ordering is ascending and numeric-aware: a trailing decimal
/// digit run is compared by value under an equal stem, so `npub2` precedes
/// `npub10` while purely textual keys fall back to lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileKey(String);

impl ProfileKey {
    /// Wraps a raw key value without validation.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the raw key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits the key into its sort components: the stem and the value of a
    /// trailing decimal digit run, when one exists.
    ///
    /// Digit runs that overflow `u128` are treated as absent so the raw-text
    /// tiebreak keeps the order total.
    fn sort_parts(&self) -> (&str, Option<u128>) {
        let raw = self.0.as_str();
        let digits = raw
            .as_bytes()
            .iter()
            .rev()
            .take_while(|byte| byte.is_ascii_digit())
            .count();
        if digits == 0 {
            return (raw, None);
        }

        let (stem, suffix) = raw.split_at(raw.len() - digits);
        match suffix.parse::<u128>() {
            Ok(value) => (stem, Some(value)),
            Err(_) => (raw, None),
        }
    }
}

impl Ord for ProfileKey {
    fn cmp(&self, other: &Self) -> Ordering {
        let (stem_a, suffix_a) = self.sort_parts();
        let (stem_b, suffix_b) = other.sort_parts();
        stem_a
            .cmp(stem_b)
            .then_with(|| suffix_a.cmp(&suffix_b))
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for ProfileKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for ProfileKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProfileKey {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for ProfileKey {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Canonical directory record.
///
/// All fields except `key` are mutable through full-record replacement; the
/// store never merges. Callers receive clones for display and must upsert a
/// whole record to persist a change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Stable external identifier, also used as the URL segment.
    pub key: ProfileKey,
    /// Display name shown in listings and matched by name search.
    pub name: String,
    /// Contact address. Shape-checked by callers, never by the store.
    pub email: String,
    /// Optional free-form phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Profile {
    /// Creates a record with no phone number.
    pub fn new(
        key: impl Into<ProfileKey>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            email: email.into(),
            phone: None,
        }
    }
}

/// Reports whether `value` looks like a mail address.
///
/// This is the basic shape check collaborators run before storing a record;
/// an empty value is simply "no address" and should be skipped by callers
/// rather than passed here.
pub fn is_well_formed_email(value: &str) -> bool {
    EMAIL_SHAPE_RE.is_match(value)
}

/// Builds `count` synthetic records for demos and tests.
///
/// Record `i` gets key `npub{i}`, name `alice{i}`, address
/// `alice{i}@example.com` and phone `000-{i}`.
pub fn sample_profiles(count: u32) -> Vec<Profile> {
    (0..count)
        .map(|i| {
            let mut profile = Profile::new(
                format!("npub{i}"),
                format!("alice{i}"),
                format!("alice{i}@example.com"),
            );
            profile.phone = Some(format!("000-{i}"));
            profile
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::ProfileKey;

    #[test]
    fn sort_parts_extracts_trailing_digit_runs() {
        assert_eq!(ProfileKey::new("npub7").sort_parts(), ("npub", Some(7)));
        assert_eq!(ProfileKey::new("id-10").sort_parts(), ("id-", Some(10)));
        assert_eq!(ProfileKey::new("42").sort_parts(), ("", Some(42)));
        assert_eq!(ProfileKey::new("alice").sort_parts(), ("alice", None));
        assert_eq!(ProfileKey::new("").sort_parts(), ("", None));
    }

    #[test]
    fn sort_parts_treats_oversized_digit_runs_as_plain_text() {
        let raw = format!("big{}", "9".repeat(45));
        let key = ProfileKey::new(raw.clone());
        assert_eq!(key.sort_parts(), (raw.as_str(), None));
    }
}
