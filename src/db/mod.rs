use rusqlite::Connection;
use std::path::PathBuf;
use anyhow::{Result, Context};

pub mod migrations;
pub mod queries;

#[cfg(test)]
pub mod test_helpers;

pub use migrations::{run_migrations, seed_standards};
pub use queries::*;

/// Get the database file path
pub fn get_db_path() -> Result<PathBuf> {
    let data_dir = match std::env::var("CRADLE_DATA_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => dirs::data_dir()
            .map(|dir| dir.join("cradle"))
            // Fall back to a local directory when the platform dir is unknown
            .unwrap_or_else(|| PathBuf::from("./data")),
    };

    std::fs::create_dir_all(&data_dir)
        .context(format!("Failed to create data directory: {:?}", data_dir))?;

    Ok(data_dir.join("cradle.db"))
}

/// Initialize the database connection and run migrations
/// Returns a new connection each time for thread safety
/// Each connection is automatically closed when dropped
pub fn init_db() -> Result<Connection> {
    let db_path = get_db_path()?;

    // Open connection with multi-threaded flags for better concurrency
    let conn = Connection::open_with_flags(
        &db_path,
        rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
            | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
            | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
    ).context(format!("Failed to open database at {:?}", db_path))?;

    // Enable foreign key support
    conn.execute("PRAGMA foreign_keys = ON", [])
        .context("Failed to enable foreign keys")?;

    // Optimize for concurrent access (this pragma reports the new mode back)
    conn.query_row("PRAGMA journal_mode = WAL", [], |_row| Ok(()))
        .context("Failed to enable WAL mode")?;

    // Reduce blocking by setting busy timeout
    conn.busy_timeout(std::time::Duration::from_secs(5))?;

    // Run migrations (only runs once, safe to call multiple times)
    run_migrations(&conn)?;

    // Seed the standards catalog (only seeds once, safe to call multiple times)
    seed_standards(&conn)?;

    Ok(conn)
}
