//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `pantry_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use pantry_core::db::migrations::latest_version;
use pantry_core::{open_db_in_memory, FoodService, SqliteFoodRepository};

fn main() {
    println!("pantry_core version={}", pantry_core::core_version());

    // One full create/search round against an in-memory store proves the
    // migration and repository wiring without touching the filesystem.
    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("pantry_core smoke failed: {err}");
            std::process::exit(1);
        }
    };
    println!("pantry_core schema_version={}", latest_version());

    let outcome = SqliteFoodRepository::try_new(&conn)
        .map(FoodService::new)
        .and_then(|service| {
            service.create_food("Banana", 50)?;
            service.search_foods("an")
        });

    match outcome {
        Ok(found) => println!("pantry_core smoke_search_hits={}", found.len()),
        Err(err) => {
            eprintln!("pantry_core smoke failed: {err}");
            std::process::exit(1);
        }
    }
}
