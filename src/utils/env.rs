//! Environment variable management
//!
//! Handles loading optional configuration from the environment.

use anyhow::Result;
use std::env;

/// Load environment variables from .env file
///
/// Uses dotenv crate to load variables from .env file in project root.
/// Does not fail if .env file doesn't exist (optional configuration).
pub fn load_env() -> Result<()> {
    dotenv::dotenv().ok();
    Ok(())
}

/// Resolve the log filter for env_logger
///
/// CRADLE_LOG takes precedence over the default of "info".
pub fn log_filter() -> String {
    env::var("CRADLE_LOG").unwrap_or_else(|_| "info".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[serial_test::serial]
    fn test_log_filter_default() {
        std::env::remove_var("CRADLE_LOG");
        assert_eq!(log_filter(), "info");
    }

    #[test]
    #[serial_test::serial]
    fn test_log_filter_override() {
        std::env::set_var("CRADLE_LOG", "debug,rusqlite=warn");
        assert_eq!(log_filter(), "debug,rusqlite=warn");
        std::env::remove_var("CRADLE_LOG");
    }

    #[test]
    fn test_load_env_doesnt_fail_on_missing_file() {
        // Should not panic or error even if .env doesn't exist
        let result = load_env();
        assert!(result.is_ok());
    }
}
