//! Settings management commands
//!
//! Handles application settings, data export and the destructive clear

use crate::db::{self, queries};
use crate::models::{AuditEvent, AuditEventType, Settings};

/// Get all application settings
///
/// Returns: List of all settings key-value pairs
#[tauri::command]
pub async fn get_settings() -> Result<Vec<Settings>, String> {
    let conn = db::init_db()
        .map_err(|e| format!("Failed to initialize database: {}", e))?;

    let settings = queries::select_all_settings(&conn)
        .map_err(|e| format!("Failed to fetch settings: {}", e))?;

    Ok(settings)
}

/// Update or create an application setting
///
/// # Arguments
/// * `key` - Setting key (e.g., "feed_refresh_hours", "notifications_enabled")
/// * `value` - Setting value
///
/// Returns: Success or error
#[tauri::command]
pub async fn update_settings(key: String, value: String) -> Result<(), String> {
    let conn = db::init_db()
        .map_err(|e| format!("Failed to initialize database: {}", e))?;

    // Validate key
    if key.is_empty() {
        return Err("Setting key cannot be empty".to_string());
    }

    // Update or insert setting
    queries::insert_or_update_setting(&conn, &key, &value)
        .map_err(|e| format!("Failed to update setting: {}", e))?;

    // Log audit event
    let event = AuditEvent::new(
        AuditEventType::SettingsChanged,
        format!("Updated setting: {} = {}", key, value),
    );
    let _ = queries::insert_audit_event(&conn, &event);

    Ok(())
}

/// Clear stored safety checks and the audit trail
///
/// The standards catalog and settings are kept. A fresh audit entry
/// records that the clear happened.
#[tauri::command]
pub async fn clear_database() -> Result<(), String> {
    let conn = db::init_db()
        .map_err(|e| format!("Failed to initialize database: {}", e))?;

    queries::clear_database(&conn)
        .map_err(|e| format!("Failed to clear database: {}", e))?;

    let event = AuditEvent::new(
        AuditEventType::DatabaseCleared,
        "Stored safety checks and audit trail cleared".to_string(),
    );
    let _ = queries::insert_audit_event(&conn, &event);

    log::info!("database cleared");

    Ok(())
}

/// Export all stored data as a single JSON document
///
/// Returns: Object with safety checks, settings, audit events and the
/// standards catalog
#[tauri::command]
pub async fn export_data() -> Result<serde_json::Value, String> {
    let conn = db::init_db()
        .map_err(|e| format!("Failed to initialize database: {}", e))?;

    let safety_checks = queries::select_all_safety_checks(&conn)
        .map_err(|e| format!("Failed to export safety checks: {}", e))?;

    let settings = queries::select_all_settings(&conn)
        .map_err(|e| format!("Failed to export settings: {}", e))?;

    let audit_events = queries::select_audit_events(&conn, 1000)
        .map_err(|e| format!("Failed to export audit events: {}", e))?;

    let standards = queries::select_active_standards(&conn, None)
        .map_err(|e| format!("Failed to export standards: {}", e))?;

    Ok(serde_json::json!({
        "exported_at": chrono::Utc::now().to_rfc3339(),
        "safety_checks": safety_checks,
        "settings": settings,
        "audit_events": audit_events,
        "standards": standards,
    }))
}
