//! Audit trail commands
//!
//! Handles audit event retrieval and filtering

use crate::db::{self, queries};
use crate::models::AuditEvent;
use serde::{Deserialize, Serialize};

/// Audit event filter options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditFilters {
    pub event_type: Option<Vec<String>>,
    pub check_id: Option<String>,
    pub update_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub limit: Option<i64>,
}

/// Get audit events with optional filters
///
/// Returns: List of audit events sorted by creation date (newest first)
#[tauri::command]
pub async fn get_audit_events(filters: Option<AuditFilters>) -> Result<Vec<AuditEvent>, String> {
    let conn = db::init_db()
        .map_err(|e| format!("Failed to initialize database: {}", e))?;

    let limit = filters
        .as_ref()
        .and_then(|f| f.limit)
        .unwrap_or(1000);

    // Get all audit events
    let mut events = queries::select_audit_events(&conn, limit)
        .map_err(|e| format!("Failed to fetch audit events: {}", e))?;

    // Apply filters if provided
    if let Some(f) = filters {
        events.retain(|event| {
            // Filter by event_type
            if let Some(ref event_types) = f.event_type {
                if !event_types.contains(&event.event_type) {
                    return false;
                }
            }

            // Filter by check_id
            if let Some(ref check_id) = f.check_id {
                if event.check_id.as_ref() != Some(check_id) {
                    return false;
                }
            }

            // Filter by update_id
            if let Some(ref update_id) = f.update_id {
                if event.update_id.as_ref() != Some(update_id) {
                    return false;
                }
            }

            // Filter by date range
            if let Some(ref start) = f.start_date {
                if event.created_at < *start {
                    return false;
                }
            }

            if let Some(ref end) = f.end_date {
                if event.created_at > *end {
                    return false;
                }
            }

            true
        });
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_helpers::TestDbGuard;
    use crate::models::AuditEventType;

    fn insert_event(event_type: AuditEventType, check_id: Option<&str>) {
        let conn = db::init_db().unwrap();

        let mut event = AuditEvent::new(
            event_type,
            format!("Test event: {}", event_type.as_str()),
        );
        if let Some(check_id) = check_id {
            event = event.with_check_id(check_id);
        }

        queries::insert_audit_event(&conn, &event).unwrap();
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn test_get_audit_events_empty() {
        let _guard = TestDbGuard::new();

        let events = get_audit_events(None).await.unwrap();
        assert!(events.is_empty());
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn test_get_audit_events_no_filters() {
        let _guard = TestDbGuard::new();

        insert_event(AuditEventType::CheckCompleted, Some("check-1"));
        insert_event(AuditEventType::UpdatesFetched, None);

        let events = get_audit_events(None).await.unwrap();
        assert_eq!(events.len(), 2);
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn test_get_audit_events_filter_by_type() {
        let _guard = TestDbGuard::new();

        insert_event(AuditEventType::CheckCompleted, Some("check-1"));
        insert_event(AuditEventType::UpdatesFetched, None);
        insert_event(AuditEventType::SettingsChanged, None);

        let filters = AuditFilters {
            event_type: Some(vec!["check_completed".to_string()]),
            check_id: None,
            update_id: None,
            start_date: None,
            end_date: None,
            limit: None,
        };

        let events = get_audit_events(Some(filters)).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, "check_completed");
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn test_get_audit_events_filter_by_check_id() {
        let _guard = TestDbGuard::new();

        insert_event(AuditEventType::CheckCompleted, Some("check-1"));
        insert_event(AuditEventType::CheckCompleted, Some("check-2"));

        let filters = AuditFilters {
            event_type: None,
            check_id: Some("check-2".to_string()),
            update_id: None,
            start_date: None,
            end_date: None,
            limit: None,
        };

        let events = get_audit_events(Some(filters)).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].check_id.as_deref(), Some("check-2"));
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn test_get_audit_events_respects_limit() {
        let _guard = TestDbGuard::new();

        for _ in 0..5 {
            insert_event(AuditEventType::UpdatesFetched, None);
        }

        let filters = AuditFilters {
            event_type: None,
            check_id: None,
            update_id: None,
            start_date: None,
            end_date: None,
            limit: Some(3),
        };

        let events = get_audit_events(Some(filters)).await.unwrap();
        assert_eq!(events.len(), 3);
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn test_get_audit_events_newest_first() {
        let _guard = TestDbGuard::new();

        insert_event(AuditEventType::CheckCompleted, None);
        insert_event(AuditEventType::DatabaseCleared, None);

        let events = get_audit_events(None).await.unwrap();
        assert_eq!(events[0].event_type, "database_cleared");
        assert_eq!(events[1].event_type, "check_completed");
    }
}
