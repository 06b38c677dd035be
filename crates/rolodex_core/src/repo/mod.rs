//! Storage layer abstraction and the in-memory implementation.
//!
//! # Responsibility
//! - Define the use-case oriented data access contract for records.
//! - Isolate locking and container details from service orchestration.
//!
//! # Invariants
//! - Store operations are infallible; a missing record surfaces as `None`
//!   or a `false`/zero count, never as an error.
//! - Every listing leaves the store in ascending key order.

pub mod profile_repo;
