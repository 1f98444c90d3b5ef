// Cradle data models

pub mod audit;
pub mod regulation;
pub mod safety_check;
pub mod settings;
pub mod standard;

// Re-exports for convenience
pub use audit::{AuditEvent, AuditEventType};
pub use regulation::{ChangeType, RegulationChange, RegulationUpdate, UpdateType, Urgency};
pub use safety_check::{
    AgeGroup, CheckResult, CheckStatus, SafetyCategory, SafetyCheck, SafetyCheckSummary,
    SafetyItem, Severity,
};
pub use settings::Settings;
pub use standard::{ProductArea, StandardCategory, StandardRecord, StandardSummary};
