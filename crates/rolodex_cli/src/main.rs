//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `rolodex_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use log::info;
use rolodex_core::{
    default_log_level, init_logging, sample_profiles, DirectoryService, MemoryProfileRepository,
};

fn main() {
    let log_dir = std::env::temp_dir().join("rolodex-logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("logging disabled: {err}");
    }

    let directory = DirectoryService::new(MemoryProfileRepository::with_profiles(sample_profiles(
        25,
    )));
    info!("event=cli_run module=cli status=ok records=25");

    println!("rolodex_core version={}", rolodex_core::core_version());
    println!("records={}", directory.record_count());

    let first = directory.browse(1);
    println!(
        "page={} of {} showing={}",
        first.page,
        first.page_count(),
        first.items.len()
    );
    for profile in &first.items {
        println!("  {} {} {}", profile.key, profile.name, profile.email);
    }

    let hits = directory.search("alice1", 1);
    println!("search=alice1 hits={}", hits.total);
}
