use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AuditEventType {
    #[serde(rename = "check_completed")]
    CheckCompleted,
    #[serde(rename = "updates_fetched")]
    UpdatesFetched,
    #[serde(rename = "update_acknowledged")]
    UpdateAcknowledged,
    #[serde(rename = "settings_changed")]
    SettingsChanged,
    #[serde(rename = "database_cleared")]
    DatabaseCleared,
}

impl AuditEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditEventType::CheckCompleted => "check_completed",
            AuditEventType::UpdatesFetched => "updates_fetched",
            AuditEventType::UpdateAcknowledged => "update_acknowledged",
            AuditEventType::SettingsChanged => "settings_changed",
            AuditEventType::DatabaseCleared => "database_cleared",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "check_completed" => Some(AuditEventType::CheckCompleted),
            "updates_fetched" => Some(AuditEventType::UpdatesFetched),
            "update_acknowledged" => Some(AuditEventType::UpdateAcknowledged),
            "settings_changed" => Some(AuditEventType::SettingsChanged),
            "database_cleared" => Some(AuditEventType::DatabaseCleared),
            _ => None,
        }
    }
}

/// Represents an audit trail event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditEvent {
    pub id: i64,
    pub event_type: String,
    pub check_id: Option<String>,
    pub update_id: Option<String>,
    pub description: String,
    pub metadata: Option<String>,
    pub created_at: String,
}

impl AuditEvent {
    pub fn new(event_type: AuditEventType, description: String) -> Self {
        Self {
            id: 0,
            event_type: event_type.as_str().to_string(),
            check_id: None,
            update_id: None,
            description,
            metadata: None,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn get_event_type(&self) -> Option<AuditEventType> {
        AuditEventType::from_str(&self.event_type)
    }

    pub fn with_check_id(mut self, check_id: &str) -> Self {
        self.check_id = Some(check_id.to_string());
        self
    }

    pub fn with_update_id(mut self, update_id: &str) -> Self {
        self.update_id = Some(update_id.to_string());
        self
    }

    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata.to_string());
        self
    }

    pub fn get_metadata(&self) -> Option<Value> {
        self.metadata
            .as_ref()
            .and_then(|m| serde_json::from_str(m).ok())
    }
}
