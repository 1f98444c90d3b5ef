use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UpdateType {
    #[serde(rename = "major_update")]
    MajorUpdate,
    #[serde(rename = "minor_update")]
    MinorUpdate,
    #[serde(rename = "correction")]
    Correction,
    #[serde(rename = "withdrawal")]
    Withdrawal,
}

impl UpdateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateType::MajorUpdate => "major_update",
            UpdateType::MinorUpdate => "minor_update",
            UpdateType::Correction => "correction",
            UpdateType::Withdrawal => "withdrawal",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "major_update" => Some(UpdateType::MajorUpdate),
            "minor_update" => Some(UpdateType::MinorUpdate),
            "correction" => Some(UpdateType::Correction),
            "withdrawal" => Some(UpdateType::Withdrawal),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    #[serde(rename = "added")]
    Added,
    #[serde(rename = "modified")]
    Modified,
    #[serde(rename = "deleted")]
    Deleted,
    #[serde(rename = "replaced")]
    Replaced,
}

impl ChangeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Added => "added",
            ChangeType::Modified => "modified",
            ChangeType::Deleted => "deleted",
            ChangeType::Replaced => "replaced",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "added" => Some(ChangeType::Added),
            "modified" => Some(ChangeType::Modified),
            "deleted" => Some(ChangeType::Deleted),
            "replaced" => Some(ChangeType::Replaced),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "high")]
    High,
    #[serde(rename = "critical")]
    Critical,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
            Urgency::Critical => "critical",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Urgency::Low),
            "medium" => Some(Urgency::Medium),
            "high" => Some(Urgency::High),
            "critical" => Some(Urgency::Critical),
            _ => None,
        }
    }

    pub fn numeric_value(&self) -> i32 {
        match self {
            Urgency::Low => 1,
            Urgency::Medium => 2,
            Urgency::High => 3,
            Urgency::Critical => 4,
        }
    }
}

/// One changed section inside a regulation update
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegulationChange {
    pub section_id: String,
    pub section_title: String,
    pub change_type: ChangeType,
    pub old_content: Option<String>,
    pub new_content: Option<String>,
}

impl RegulationChange {
    pub fn added(section_id: &str, section_title: &str, new_content: &str) -> Self {
        Self {
            section_id: section_id.to_string(),
            section_title: section_title.to_string(),
            change_type: ChangeType::Added,
            old_content: None,
            new_content: Some(new_content.to_string()),
        }
    }

    pub fn modified(section_id: &str, section_title: &str, old: &str, new: &str) -> Self {
        Self {
            section_id: section_id.to_string(),
            section_title: section_title.to_string(),
            change_type: ChangeType::Modified,
            old_content: Some(old.to_string()),
            new_content: Some(new.to_string()),
        }
    }
}

/// A published change notice for a tracked regulation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegulationUpdate {
    pub id: String,
    pub regulation_code: String,
    pub regulation_name: String,
    pub version: String,
    pub publish_date: String,
    pub update_type: UpdateType,
    pub summary: String,
    pub changes: Vec<RegulationChange>,
    pub adaptation_suggestion: String,
    pub urgency: Urgency,
    pub action_required: bool,
    pub is_read: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_type_round_trip() {
        for t in [
            UpdateType::MajorUpdate,
            UpdateType::MinorUpdate,
            UpdateType::Correction,
            UpdateType::Withdrawal,
        ] {
            assert_eq!(UpdateType::from_str(t.as_str()), Some(t));
        }
        assert_eq!(UpdateType::from_str("invalid"), None);
    }

    #[test]
    fn test_change_type_round_trip() {
        for t in [
            ChangeType::Added,
            ChangeType::Modified,
            ChangeType::Deleted,
            ChangeType::Replaced,
        ] {
            assert_eq!(ChangeType::from_str(t.as_str()), Some(t));
        }
        assert_eq!(ChangeType::from_str("invalid"), None);
    }

    #[test]
    fn test_urgency_levels() {
        assert_eq!(Urgency::Low.numeric_value(), 1);
        assert_eq!(Urgency::Medium.numeric_value(), 2);
        assert_eq!(Urgency::High.numeric_value(), 3);
        assert_eq!(Urgency::Critical.numeric_value(), 4);
        assert!(Urgency::Critical.numeric_value() > Urgency::High.numeric_value());
    }

    #[test]
    fn test_change_constructors() {
        let added = RegulationChange::added("5.5.2", "Side impact shield", "New shield clause");
        assert_eq!(added.change_type, ChangeType::Added);
        assert_eq!(added.old_content, None);
        assert_eq!(added.new_content.as_deref(), Some("New shield clause"));

        let modified = RegulationChange::modified("5.3.3", "Side impact", "old text", "new text");
        assert_eq!(modified.change_type, ChangeType::Modified);
        assert_eq!(modified.old_content.as_deref(), Some("old text"));
        assert_eq!(modified.new_content.as_deref(), Some("new text"));
    }

    #[test]
    fn test_regulation_update_serde() {
        let update = RegulationUpdate {
            id: "reg-update-001".to_string(),
            regulation_code: "ECE R129".to_string(),
            regulation_name: "Enhanced Child Restraint Systems".to_string(),
            version: "2024 revision".to_string(),
            publish_date: "2024-01-15".to_string(),
            update_type: UpdateType::MinorUpdate,
            summary: "Side impact test revisions".to_string(),
            changes: vec![RegulationChange::added("5.5.2", "Side impact shield", "text")],
            adaptation_suggestion: "Review side impact protection".to_string(),
            urgency: Urgency::Medium,
            action_required: true,
            is_read: false,
        };
        let json = serde_json::to_string(&update).unwrap();
        let deserialized: RegulationUpdate = serde_json::from_str(&json).unwrap();
        assert_eq!(update, deserialized);
        assert!(json.contains("minor_update"));
    }
}
