//! Domain model for the contact directory.
//!
//! # Responsibility
//! - Define the canonical record shape shared by store, paging and services.
//! - Keep key ordering rules in one place.
//!
//! # Invariants
//! - Every record is identified by a stable `ProfileKey`.
//! - Absence of a record is a normal lookup outcome, never an error.

pub mod profile;
