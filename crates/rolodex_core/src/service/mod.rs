//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store and page selector calls into use-case level APIs.
//! - Keep callers decoupled from storage and locking details.

pub mod directory_service;
