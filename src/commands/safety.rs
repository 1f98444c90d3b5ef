//! Safety check commands
//!
//! Runs the category checklist for a product and persists the resulting
//! report together with an audit trail entry

use std::collections::HashMap;

use crate::checks::SafetyCheckEngine;
use crate::db::{self, queries};
use crate::models::{
    AgeGroup, AuditEvent, AuditEventType, CheckResult, SafetyCategory, SafetyCheck,
    SafetyCheckSummary,
};

/// Run a safety check for a product and store the report
///
/// # Arguments
/// * `product_name` - Name of the product under review
/// * `age_group` - Target age band identifier (e.g., "infant", "toddler")
/// * `overrides` - Measured results keyed by category identifier; categories
///   without an entry fall back to the age-based defaults
///
/// Returns: The completed safety check report
#[tauri::command]
pub async fn run_safety_check(
    product_name: String,
    age_group: String,
    overrides: Option<HashMap<String, CheckResult>>,
) -> Result<SafetyCheck, String> {
    let age_group = AgeGroup::from_str(&age_group)
        .ok_or_else(|| format!("Unknown age group: {}", age_group))?;

    // Keys that don't name a known category are dropped, not errors
    let mut known = HashMap::new();
    if let Some(overrides) = overrides {
        for (key, result) in overrides {
            match SafetyCategory::from_str(&key) {
                Some(category) => {
                    known.insert(category, result);
                }
                None => log::warn!("ignoring override for unknown category '{}'", key),
            }
        }
    }

    let check = SafetyCheckEngine::run(&product_name, age_group, &known);

    let mut conn = db::init_db()
        .map_err(|e| format!("Failed to initialize database: {}", e))?;

    queries::insert_safety_check(&mut conn, &check)
        .map_err(|e| format!("Failed to store safety check: {}", e))?;

    // Log audit event
    let event = AuditEvent::new(
        AuditEventType::CheckCompleted,
        format!("Safety check completed for '{}'", check.product_name),
    )
    .with_check_id(&check.id)
    .with_metadata(serde_json::json!({
        "overall_score": check.overall_score,
        "passed": check.passed,
    }));
    let _ = queries::insert_audit_event(&conn, &event);

    log::info!(
        "safety check {} for '{}' scored {}",
        check.id,
        check.product_name,
        check.overall_score
    );

    Ok(check)
}

/// Get summaries of all stored safety checks, newest first
#[tauri::command]
pub async fn get_safety_checks() -> Result<Vec<SafetyCheckSummary>, String> {
    let conn = db::init_db()
        .map_err(|e| format!("Failed to initialize database: {}", e))?;

    let summaries = queries::select_safety_check_summaries(&conn)
        .map_err(|e| format!("Failed to fetch safety checks: {}", e))?;

    Ok(summaries)
}

/// Get a single safety check with items and recommendations
///
/// # Arguments
/// * `check_id` - Identifier returned by run_safety_check
#[tauri::command]
pub async fn get_safety_check(check_id: String) -> Result<SafetyCheck, String> {
    let conn = db::init_db()
        .map_err(|e| format!("Failed to initialize database: {}", e))?;

    let check = queries::select_safety_check(&conn, &check_id)
        .map_err(|e| format!("Failed to fetch safety check: {}", e))?;

    check.ok_or_else(|| format!("Safety check not found: {}", check_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_helpers::TestDbGuard;
    use crate::models::CheckStatus;

    #[tokio::test]
    #[serial_test::serial]
    async fn test_run_safety_check_persists_report() {
        let _guard = TestDbGuard::new();

        let check = run_safety_check("Alpine high chair".to_string(), "toddler".to_string(), None)
            .await
            .unwrap();
        assert!(!check.id.is_empty());
        assert_eq!(check.items.len(), 8);

        let conn = db::init_db().unwrap();
        let stored = queries::select_safety_check(&conn, &check.id).unwrap();
        assert!(stored.is_some());
        assert_eq!(stored.unwrap().product_name, "Alpine high chair");
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn test_run_safety_check_infant_defaults() {
        let _guard = TestDbGuard::new();

        let check = run_safety_check("Alpine high chair".to_string(), "infant".to_string(), None)
            .await
            .unwrap();

        assert_eq!(check.overall_score, 92);
        assert!(check.passed);
        assert_eq!(check.recommendations.len(), 1);
        assert!(check.recommendations[0].starts_with("Caution:"));
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn test_run_safety_check_rejects_unknown_age_group() {
        let _guard = TestDbGuard::new();

        let result =
            run_safety_check("Chair".to_string(), "adult".to_string(), None).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unknown age group"));
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn test_run_safety_check_drops_unknown_override_keys() {
        let _guard = TestDbGuard::new();

        let mut overrides = HashMap::new();
        overrides.insert(
            "flux_capacitor".to_string(),
            CheckResult::new(CheckStatus::Failed, "not a real category"),
        );

        let check = run_safety_check(
            "Alpine high chair".to_string(),
            "infant".to_string(),
            Some(overrides),
        )
        .await
        .unwrap();

        // The unknown key changes nothing
        assert_eq!(check.overall_score, 92);
        assert!(check.passed);
        assert_eq!(check.items.len(), 8);
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn test_run_safety_check_applies_override() {
        let _guard = TestDbGuard::new();

        let mut overrides = HashMap::new();
        overrides.insert(
            "small_parts".to_string(),
            CheckResult::new(CheckStatus::Failed, "Detachable caster wheel fits the test cylinder"),
        );

        let check = run_safety_check(
            "Rolling play table".to_string(),
            "toddler".to_string(),
            Some(overrides),
        )
        .await
        .unwrap();

        assert!(!check.passed);

        let small_parts = check
            .items
            .iter()
            .find(|i| i.category == SafetyCategory::SmallParts)
            .unwrap();
        assert_eq!(small_parts.status, CheckStatus::Failed);
        assert_eq!(small_parts.severity.as_str(), "critical");
        assert!(check
            .recommendations
            .iter()
            .any(|r| r.starts_with("Critical issue: Small parts")));
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn test_run_safety_check_writes_audit_event() {
        let _guard = TestDbGuard::new();

        let check = run_safety_check("Chair".to_string(), "preschool".to_string(), None)
            .await
            .unwrap();

        let conn = db::init_db().unwrap();
        let events = queries::select_audit_events_by_type(&conn, "check_completed", 10).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].check_id, Some(check.id.clone()));

        let metadata = events[0].get_metadata().unwrap();
        assert_eq!(metadata["overall_score"], serde_json::json!(check.overall_score));
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn test_get_safety_check_not_found() {
        let _guard = TestDbGuard::new();

        let result = get_safety_check("no-such-check".to_string()).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("not found"));
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn test_get_safety_checks_newest_first() {
        let _guard = TestDbGuard::new();

        let first = run_safety_check("First".to_string(), "teen".to_string(), None)
            .await
            .unwrap();
        let second = run_safety_check("Second".to_string(), "teen".to_string(), None)
            .await
            .unwrap();

        let summaries = get_safety_checks().await.unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, second.id);
        assert_eq!(summaries[1].id, first.id);
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn test_run_safety_check_round_trips_through_lookup() {
        let _guard = TestDbGuard::new();

        let check = run_safety_check("Crib Classic".to_string(), "infant".to_string(), None)
            .await
            .unwrap();

        let fetched = get_safety_check(check.id.clone()).await.unwrap();
        assert_eq!(fetched, check);
    }
}
