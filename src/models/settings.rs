use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Represents application settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub key: String,
    pub value: String,
    pub updated_at: String,
}

impl Settings {
    pub fn new(key: String, value: String) -> Self {
        Self {
            key,
            value,
            updated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Seeded key/value pairs for a fresh database
    pub fn defaults() -> Vec<(&'static str, &'static str)> {
        vec![
            ("feed_refresh_hours", "24"),
            ("notifications_enabled", "true"),
            ("default_product_area", "high_chair"),
        ]
    }

    pub fn get_value_as_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.value)
    }

    pub fn set_value(&mut self, value: String) {
        self.value = value;
        self.updated_at = chrono::Utc::now().to_rfc3339();
    }
}
