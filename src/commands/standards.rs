//! Standard catalog commands
//!
//! Read-only queries over the bundled catalog of child product standards

use crate::db::{self, queries};
use crate::models::{ProductArea, StandardRecord, StandardSummary};

/// Look up a high chair standard by its identifier
///
/// # Arguments
/// * `standard_id` - Catalog identifier, e.g. "EN-14988-1"
///
/// Returns: The standard, or None when the id is not in the high chair catalog
#[tauri::command]
pub async fn get_high_chair_standard(
    standard_id: String,
) -> Result<Option<StandardRecord>, String> {
    let conn = db::init_db()
        .map_err(|e| format!("Failed to initialize database: {}", e))?;

    queries::select_standard(&conn, &standard_id, ProductArea::HighChair)
        .map_err(|e| format!("Failed to fetch standard: {}", e))
}

/// Look up a crib standard by its identifier
#[tauri::command]
pub async fn get_crib_standard(standard_id: String) -> Result<Option<StandardRecord>, String> {
    let conn = db::init_db()
        .map_err(|e| format!("Failed to initialize database: {}", e))?;

    queries::select_standard(&conn, &standard_id, ProductArea::Crib)
        .map_err(|e| format!("Failed to fetch standard: {}", e))
}

/// List all current standards, optionally restricted to one product area
///
/// # Arguments
/// * `area` - Optional area identifier ("high_chair" or "crib")
#[tauri::command]
pub async fn list_active_standards(
    area: Option<String>,
) -> Result<Vec<StandardRecord>, String> {
    let area = match area {
        Some(raw) => Some(
            ProductArea::from_str(&raw).ok_or_else(|| format!("Unknown product area: {}", raw))?,
        ),
        None => None,
    };

    let conn = db::init_db()
        .map_err(|e| format!("Failed to initialize database: {}", e))?;

    queries::select_active_standards(&conn, area)
        .map_err(|e| format!("Failed to fetch standards: {}", e))
}

/// Search standards by code or name substring, case-insensitive
///
/// # Arguments
/// * `query` - Substring matched against standard codes and names
/// * `area` - Optional area identifier restricting the search to one catalog
#[tauri::command]
pub async fn search_standards(
    query: String,
    area: Option<String>,
) -> Result<Vec<StandardRecord>, String> {
    let area = match area {
        Some(raw) => Some(
            ProductArea::from_str(&raw).ok_or_else(|| format!("Unknown product area: {}", raw))?,
        ),
        None => None,
    };

    let conn = db::init_db()
        .map_err(|e| format!("Failed to initialize database: {}", e))?;

    queries::search_standards(&conn, &query, area)
        .map_err(|e| format!("Failed to search standards: {}", e))
}

/// Get the compact summary for a standard id, checking the high chair
/// catalog first and falling back to the crib catalog
#[tauri::command]
pub async fn get_standard_summary(
    standard_id: String,
) -> Result<Option<StandardSummary>, String> {
    let conn = db::init_db()
        .map_err(|e| format!("Failed to initialize database: {}", e))?;

    let high_chair = queries::select_standard(&conn, &standard_id, ProductArea::HighChair)
        .map_err(|e| format!("Failed to fetch standard: {}", e))?;
    if let Some(standard) = high_chair {
        return Ok(Some(standard.summary()));
    }

    let crib = queries::select_standard(&conn, &standard_id, ProductArea::Crib)
        .map_err(|e| format!("Failed to fetch standard: {}", e))?;

    Ok(crib.map(|standard| standard.summary()))
}

/// Get compact summaries for a set of standard ids
///
/// Ids missing from both catalogs are skipped rather than reported
#[tauri::command]
pub async fn get_standard_summaries(
    standard_ids: Vec<String>,
) -> Result<Vec<StandardSummary>, String> {
    let conn = db::init_db()
        .map_err(|e| format!("Failed to initialize database: {}", e))?;

    queries::select_standard_summaries(&conn, &standard_ids)
        .map_err(|e| format!("Failed to fetch standard summaries: {}", e))
}
