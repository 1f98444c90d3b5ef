//! Update feed for the regulation monitor.
//!
//! The feed is the seam where a remote regulation service would plug in.
//! The bundled implementation returns the current notice set shipped with
//! the app, so the monitor behaves identically offline.

use crate::models::{RegulationChange, RegulationUpdate, UpdateType, Urgency};

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Update feed unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed update record: {0}")]
    Malformed(String),
}

/// Source of regulation update records.
#[cfg_attr(test, mockall::automock)]
pub trait UpdateFeed: Send + Sync {
    fn fetch(&self) -> Result<Vec<RegulationUpdate>, FeedError>;
}

/// Feed backed by the notice set bundled with the app.
pub struct BundledFeed;

impl UpdateFeed for BundledFeed {
    fn fetch(&self) -> Result<Vec<RegulationUpdate>, FeedError> {
        Ok(vec![
            BundledFeed::ece_r129_2024_revision(),
            BundledFeed::gb_27887_2025_draft(),
        ])
    }
}

impl BundledFeed {
    /// ECE R129 2024 revision - side impact test changes
    fn ece_r129_2024_revision() -> RegulationUpdate {
        RegulationUpdate {
            id: "UPDATE_20240129_001".to_string(),
            regulation_code: "ECE R129".to_string(),
            regulation_name: "Uniform provisions concerning the approval of enhanced child restraint systems".to_string(),
            version: "2024 revision".to_string(),
            publish_date: "2024-01-15".to_string(),
            update_type: UpdateType::MinorUpdate,
            summary: "Revised side impact test requirements and added a new dummy type".to_string(),
            changes: vec![
                RegulationChange::modified(
                    "\u{a7}5.3.3",
                    "Side impact test",
                    "Q3s dummy, impact speed 32km/h",
                    "Q3.5 dummy, impact speed 32km/h, with head acceleration monitoring",
                ),
                RegulationChange::added(
                    "\u{a7}5.5.2",
                    "Side impact shield test",
                    "New strength test requirements for side impact shields",
                ),
            ],
            adaptation_suggestion: "Update the side protection structure design and reinforce side impact shields".to_string(),
            urgency: Urgency::Medium,
            action_required: true,
            is_read: false,
        }
    }

    /// GB 27887-2025 draft - booster cushion requirements
    fn gb_27887_2025_draft() -> RegulationUpdate {
        RegulationUpdate {
            id: "UPDATE_20240128_001".to_string(),
            regulation_code: "GB 27887".to_string(),
            regulation_name: "Restraining devices for child occupants of power-driven vehicles".to_string(),
            version: "GB 27887-2025 (draft)".to_string(),
            publish_date: "2024-01-20".to_string(),
            update_type: UpdateType::MajorUpdate,
            summary: "Added detailed booster cushion requirements and changed the crash test dummies".to_string(),
            changes: vec![
                RegulationChange::added(
                    "\u{a7}5.4",
                    "Booster cushion requirements",
                    "New technical requirements for booster cushions, including height adjustment and backrest support",
                ),
                RegulationChange::modified(
                    "\u{a7}5.1",
                    "Frontal impact test",
                    "Hybrid III 3-year-old dummy",
                    "Hybrid III 3-year-old dummy or Q3 dummy",
                ),
            ],
            adaptation_suggestion: "Designs that include a booster cushion must adopt the new technical requirements".to_string(),
            urgency: Urgency::High,
            action_required: true,
            is_read: false,
        }
    }
}
