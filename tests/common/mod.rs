//! Shared helpers for the integration test suites.
//!
//! `TestEnv` gives each test an isolated data directory and opens the
//! database through the normal application path, so migrations and the
//! standards catalog seed run exactly as they do at startup.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use anyhow::Result;
use rusqlite::Connection;
use tempfile::TempDir;

/// Isolated database environment for one test.
///
/// Points `CRADLE_DATA_DIR` at a fresh temporary directory before opening
/// the connection. Tests that touch the environment variable must be
/// serialized; the suites mark those with `#[serial_test::serial]`.
pub struct TestEnv {
    temp_dir: TempDir,
    db_path: PathBuf,
    conn: Connection,
}

impl TestEnv {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        std::env::set_var("CRADLE_DATA_DIR", temp_dir.path());

        let conn = cradle::db::init_db()?;
        let db_path = temp_dir.path().join("cradle.db");

        Ok(Self {
            temp_dir,
            db_path,
            conn,
        })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn connection_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub fn data_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn count_rows(&self, table: &str) -> Result<i64> {
        let count = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                row.get(0)
            })?;
        Ok(count)
    }

    pub fn get_setting(&self, key: &str) -> Result<Option<String>> {
        use rusqlite::OptionalExtension;

        let value = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                rusqlite::params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn table_exists(&self, name: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            rusqlite::params![name],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    pub fn list_tables(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT name FROM sqlite_master WHERE type = 'table' \
             AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )?;
        let tables = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(tables)
    }

    pub fn list_indexes(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT name FROM sqlite_master WHERE type = 'index' \
             AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )?;
        let indexes = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(indexes)
    }

    pub fn schema_version(&self) -> Result<i64> {
        let version = self
            .conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))?;
        Ok(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[serial_test::serial]
    fn test_env_creates_isolated_database() {
        let env = TestEnv::new().unwrap();
        assert!(env.db_path().exists());
        assert!(env.db_path().starts_with(env.data_dir()));
        assert_eq!(env.count_rows("safety_checks").unwrap(), 0);
    }

    #[test]
    #[serial_test::serial]
    fn test_env_helpers_see_migrated_schema() {
        let env = TestEnv::new().unwrap();
        assert!(env.table_exists("standards").unwrap());
        assert_eq!(env.schema_version().unwrap(), 2);
        assert_eq!(env.get_setting("feed_refresh_hours").unwrap().as_deref(), Some("24"));
    }
}
