//! Utility functions for the Cradle backend
//!
//! Provides environment variable handling and other common utilities.

pub mod env;

pub use env::{load_env, log_filter};
