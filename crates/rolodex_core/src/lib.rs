//! Core domain logic for Rolodex, an in-memory contact directory.
//! This crate is the single source of truth for directory invariants.

pub mod logging;
pub mod model;
pub mod page;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::profile::{is_well_formed_email, sample_profiles, Profile, ProfileKey};
pub use page::{parse_page_param, select_page, PageWindow, PAGE_SIZE};
pub use repo::profile_repo::{MemoryProfileRepository, ProfileRepository};
pub use service::directory_service::{DirectoryError, DirectoryService, ProfileDraft};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
