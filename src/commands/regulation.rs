//! Regulation update commands
//!
//! Fetches updates from the regulation feed, tracks acknowledgement state
//! and raises desktop notifications for updates that require action

use tauri::{Emitter, Manager};

use crate::db::{self, queries};
use crate::models::{AuditEvent, AuditEventType, RegulationUpdate};
use crate::monitor::RegulationMonitor;

/// Check the regulation feed for updates
///
/// Emits a `regulation-updates` event with the fresh list and, when
/// notifications are enabled, shows a desktop notification for each
/// unread update that requires action.
///
/// Returns: All updates currently known to the monitor
#[tauri::command]
pub async fn check_regulation_updates<R: tauri::Runtime>(
    app: tauri::AppHandle<R>,
    monitor: tauri::State<'_, RegulationMonitor>,
) -> Result<Vec<RegulationUpdate>, String> {
    let updates = monitor
        .check_updates()
        .map_err(|e| format!("Failed to check regulation updates: {}", e))?;

    let conn = db::init_db()
        .map_err(|e| format!("Failed to initialize database: {}", e))?;

    let event = AuditEvent::new(
        AuditEventType::UpdatesFetched,
        format!("Fetched {} regulation update(s)", updates.len()),
    );
    let _ = queries::insert_audit_event(&conn, &event);

    // The frontend refreshes its update list on this event
    let _ = app.emit("regulation-updates", &updates);

    if notifications_enabled(&conn) {
        notify_action_required(&app, &updates);
    }

    Ok(updates)
}

/// Get updates that have not been acknowledged yet
#[tauri::command]
pub async fn get_unread_updates(
    monitor: tauri::State<'_, RegulationMonitor>,
) -> Result<Vec<RegulationUpdate>, String> {
    Ok(monitor.unread_updates())
}

/// Acknowledge a single regulation update
///
/// # Arguments
/// * `update_id` - Identifier of the update to mark as read
///
/// Returns: true if the update was known and is now marked read
#[tauri::command]
pub async fn mark_update_read(
    update_id: String,
    monitor: tauri::State<'_, RegulationMonitor>,
) -> Result<bool, String> {
    let marked = monitor.mark_as_read(&update_id);

    if marked {
        let conn = db::init_db()
            .map_err(|e| format!("Failed to initialize database: {}", e))?;

        let event = AuditEvent::new(
            AuditEventType::UpdateAcknowledged,
            format!("Regulation update {} marked as read", update_id),
        )
        .with_update_id(&update_id);
        let _ = queries::insert_audit_event(&conn, &event);
    }

    Ok(marked)
}

/// Get all known updates for one regulation code
///
/// # Arguments
/// * `regulation_code` - Exact code, e.g. "ECE R129"
#[tauri::command]
pub async fn get_updates_for_regulation(
    regulation_code: String,
    monitor: tauri::State<'_, RegulationMonitor>,
) -> Result<Vec<RegulationUpdate>, String> {
    Ok(monitor.updates_for_regulation(&regulation_code))
}

fn notifications_enabled(conn: &rusqlite::Connection) -> bool {
    match queries::select_setting(conn, "notifications_enabled") {
        Ok(Some(setting)) => setting.value == "true",
        _ => true,
    }
}

fn notify_action_required<R: tauri::Runtime>(
    app: &tauri::AppHandle<R>,
    updates: &[RegulationUpdate],
) {
    // The notification plugin is only registered in the full application
    let notification = match app.try_state::<tauri_plugin_notification::Notification<R>>() {
        Some(notification) => notification,
        None => return,
    };

    for update in updates.iter().filter(|u| u.action_required && !u.is_read) {
        let shown = notification
            .builder()
            .title(format!("Regulation update: {}", update.regulation_code))
            .body(update.summary.clone())
            .show();

        if let Err(e) = shown {
            log::warn!("failed to show notification for {}: {}", update.id, e);
        }
    }
}
