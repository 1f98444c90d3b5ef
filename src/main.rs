//! Cradle Tauri 2.0 Backend
//!
//! Main entry point for the Cradle desktop application. Registers all
//! 18 Tauri IPC commands and the managed regulation monitor.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use cradle::commands::{audit, regulation, safety, settings, standards};
use cradle::monitor::RegulationMonitor;

fn main() {
    // Optional .env configuration, then logging
    let _ = cradle::utils::load_env();
    env_logger::Builder::new()
        .parse_filters(&cradle::utils::log_filter())
        .init();

    // Initialize database - REQUIRED for app to function properly
    // If database initialization fails, the app cannot operate correctly
    if let Err(e) = cradle::db::init_db() {
        eprintln!("[cradle] FATAL ERROR: Failed to initialize database");
        eprintln!("[cradle] Error details: {}", e);
        eprintln!("[cradle] The application cannot run without a working database.");
        eprintln!("[cradle] Please check:");
        eprintln!("[cradle]   - File system permissions in the data directory");
        eprintln!("[cradle]   - Available disk space");
        eprintln!("[cradle]   - SQLite installation");
        std::process::exit(1);
    }

    // Build the Tauri application
    // If this fails, log detailed error and exit gracefully
    if let Err(e) = tauri::Builder::default()
        .plugin(tauri_plugin_notification::init())
        .manage(RegulationMonitor::default())
        .invoke_handler(tauri::generate_handler![
            // Safety Check Commands (3)
            safety::run_safety_check,
            safety::get_safety_checks,
            safety::get_safety_check,
            // Regulation Commands (4)
            regulation::check_regulation_updates,
            regulation::get_unread_updates,
            regulation::mark_update_read,
            regulation::get_updates_for_regulation,
            // Standard Commands (6)
            standards::get_high_chair_standard,
            standards::get_crib_standard,
            standards::list_active_standards,
            standards::search_standards,
            standards::get_standard_summary,
            standards::get_standard_summaries,
            // Settings Commands (4)
            settings::get_settings,
            settings::update_settings,
            settings::clear_database,
            settings::export_data,
            // Audit Commands (1)
            audit::get_audit_events,
        ])
        .run(tauri::generate_context!())
    {
        eprintln!("[cradle] FATAL ERROR: Application failed to start");
        eprintln!("[cradle] Error details: {}", e);
        eprintln!("[cradle] This may be due to:");
        eprintln!("[cradle]   - Port conflicts (if another instance is running)");
        eprintln!("[cradle]   - Missing system dependencies");
        eprintln!("[cradle]   - Incompatible OS version");
        std::process::exit(1);
    }
}
