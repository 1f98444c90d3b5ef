// Safety check engine: baseline tables, severity derivation, scoring

pub mod defaults;
pub mod engine;
pub mod severity;

pub use defaults::default_check;
pub use engine::SafetyCheckEngine;
pub use severity::derive_severity;
