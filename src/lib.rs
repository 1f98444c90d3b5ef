// Cradle - safety compliance assistant for children's product design
// Module re-exports

pub mod checks;
pub mod commands;
pub mod db;
pub mod models;
pub mod monitor;
pub mod utils;

// Re-export commonly used types
pub use models::{
    AgeGroup, AuditEvent, AuditEventType, CheckResult, CheckStatus, ProductArea,
    RegulationUpdate, SafetyCategory, SafetyCheck, SafetyCheckSummary, Settings, Severity,
    StandardRecord, StandardSummary,
};

pub use checks::SafetyCheckEngine;
pub use db::{init_db, get_db_path};
pub use monitor::{BundledFeed, FeedError, RegulationMonitor, UpdateFeed};
