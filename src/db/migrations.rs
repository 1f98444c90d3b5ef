use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::models::{Settings, StandardRecord};

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Index creation statements extracted for idempotent execution
/// These are safe to run on every init because they use IF NOT EXISTS
const INDEX_SQL: &str = "
CREATE INDEX IF NOT EXISTS idx_safety_items_check_id ON safety_items(check_id);
CREATE INDEX IF NOT EXISTS idx_safety_checks_created_at ON safety_checks(created_at);
CREATE INDEX IF NOT EXISTS idx_audit_events_type ON audit_events(event_type);
CREATE INDEX IF NOT EXISTS idx_audit_events_created_at ON audit_events(created_at);
";

/// Get current database schema version
fn get_schema_version(conn: &Connection) -> Result<i64> {
    let version: i64 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .context("Failed to get schema version")?;
    Ok(version)
}

/// Set database schema version
fn set_schema_version(conn: &Connection, version: i64) -> Result<()> {
    conn.execute(&format!("PRAGMA user_version = {}", version), [])
        .context("Failed to set schema version")?;
    Ok(())
}

/// Migrate from v0 (empty) to v1 (initial schema)
fn migrate_to_v1(conn: &Connection) -> Result<()> {
    // Execute initial schema: checks, items, audit log, settings
    conn.execute_batch(SCHEMA_SQL)
        .context("Failed to execute v1 schema migration")?;

    // Create all indexes
    conn.execute_batch(INDEX_SQL)
        .context("Failed to create v1 indexes")?;

    Ok(())
}

/// Migrate from v1 to v2 (standards catalog)
/// Moves the reference catalog of child product standards into the
/// database so queries and exports read from one place.
fn migrate_to_v2(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS standards (
            id TEXT PRIMARY KEY,
            code TEXT NOT NULL,
            name TEXT NOT NULL,
            version TEXT NOT NULL,
            category TEXT NOT NULL CHECK(category IN ('international', 'regional', 'national')),
            area TEXT NOT NULL CHECK(area IN ('high_chair', 'crib')),
            region TEXT NOT NULL,
            applicable_age TEXT NOT NULL,
            applicable_weight TEXT NOT NULL,
            scope TEXT NOT NULL,
            effective_date TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'current' CHECK(status IN ('current', 'superseded')),
            source TEXT NOT NULL
        )",
        [],
    )
    .context("Failed to create standards table")?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_standards_area ON standards(area)",
        [],
    )
    .context("Failed to create idx_standards_area index")?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_standards_status ON standards(status)",
        [],
    )
    .context("Failed to create idx_standards_status index")?;

    Ok(())
}

/// Run all pending database migrations
///
/// Uses PRAGMA user_version to track schema state:
/// - v0: Empty database (no tables)
/// - v1: Initial schema (safety checks, items, audit events, settings)
/// - v2: Standards catalog table
pub fn run_migrations(conn: &Connection) -> Result<()> {
    let current_version = get_schema_version(conn)?;

    // Apply migrations incrementally
    if current_version < 1 {
        migrate_to_v1(conn)?;
        set_schema_version(conn, 1)?;
    }

    if current_version < 2 {
        migrate_to_v2(conn)?;
        set_schema_version(conn, 2)?;
    }

    // Seed default settings (idempotent - won't overwrite existing values)
    seed_settings(conn)?;

    Ok(())
}

/// Seed default settings into the database
pub fn seed_settings(conn: &Connection) -> Result<()> {
    // Using INSERT OR IGNORE ensures we don't overwrite existing settings
    for (key, value) in Settings::defaults() {
        conn.execute(
            "INSERT OR IGNORE INTO settings (key, value, updated_at) VALUES (?, ?, datetime('now'))",
            [key, value],
        )
        .with_context(|| format!("Failed to seed setting '{}'", key))?;
    }

    Ok(())
}

/// Seed the standards catalog into the database
pub fn seed_standards(conn: &Connection) -> Result<()> {
    // Check if standards have already been seeded
    let standard_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM standards", [], |row| row.get(0))
        .context("Failed to count existing standards")?;

    if standard_count > 0 {
        return Ok(());
    }

    for standard in StandardRecord::all_standards() {
        conn.execute(
            "INSERT INTO standards (
                id, code, name, version, category, area, region,
                applicable_age, applicable_weight, scope, effective_date, status, source
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
            rusqlite::params![
                standard.id,
                standard.code,
                standard.name,
                standard.version,
                standard.category.as_str(),
                standard.area.as_str(),
                standard.region,
                standard.applicable_age,
                standard.applicable_weight,
                standard.scope,
                standard.effective_date,
                standard.status,
                standard.source,
            ],
        )
        .with_context(|| format!("Failed to seed standard '{}'", standard.id))?;
    }

    Ok(())
}
