//! Tauri IPC Commands - Frontend to Backend Communication
//!
//! This module contains all 18 Tauri commands for frontend-backend communication:
//!
//! Safety Check Commands (3):
//! - run_safety_check: Score a product against the category checklist
//! - get_safety_checks: List stored check summaries
//! - get_safety_check: Get a single check with full details
//!
//! Regulation Commands (4):
//! - check_regulation_updates: Fetch updates from the regulation feed
//! - get_unread_updates: List updates not yet acknowledged
//! - mark_update_read: Acknowledge a single update
//! - get_updates_for_regulation: Filter updates by regulation code
//!
//! Standard Commands (6):
//! - get_high_chair_standard: Look up a high chair standard by id
//! - get_crib_standard: Look up a crib standard by id
//! - list_active_standards: List current standards, optionally per area
//! - search_standards: Substring search over codes and names
//! - get_standard_summary: Compact lookup across both areas
//! - get_standard_summaries: Compact listing for a set of ids
//!
//! Settings Commands (4):
//! - get_settings: Retrieve all settings
//! - update_settings: Create or update a setting
//! - clear_database: Clear stored checks and audit trail (destructive)
//! - export_data: Export all data to JSON
//!
//! Audit Commands (1):
//! - get_audit_events: Retrieve audit trail with filters

pub mod audit;
pub mod regulation;
pub mod safety;
pub mod settings;
pub mod standards;

// Re-export all commands
pub use audit::get_audit_events;
pub use regulation::{
    check_regulation_updates, get_unread_updates, get_updates_for_regulation, mark_update_read,
};
pub use safety::{get_safety_check, get_safety_checks, run_safety_check};
pub use settings::{clear_database, export_data, get_settings, update_settings};
pub use standards::{
    get_crib_standard, get_high_chair_standard, get_standard_summaries, get_standard_summary,
    list_active_standards, search_standards,
};
