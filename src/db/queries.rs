use rusqlite::{Connection, params, OptionalExtension};
use anyhow::{Result, Context};
use crate::models::*;

// ===== SAFETY CHECK CRUD =====

/// Persist a completed check and its items in one transaction
pub fn insert_safety_check(conn: &mut Connection, check: &SafetyCheck) -> Result<()> {
    let recommendations = serde_json::to_string(&check.recommendations)
        .context("Failed to serialize recommendations")?;

    let tx = conn.transaction().context("Failed to start transaction")?;

    tx.execute(
        "INSERT INTO safety_checks (id, product_name, age_group, overall_score, passed, recommendations) VALUES (?, ?, ?, ?, ?, ?)",
        params![
            check.id,
            check.product_name,
            check.age_group.as_str(),
            check.overall_score,
            check.passed,
            recommendations,
        ],
    ).context("Failed to insert safety check")?;

    for (position, item) in check.items.iter().enumerate() {
        tx.execute(
            "INSERT INTO safety_items (check_id, category, name, status, notes, severity, position) VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                check.id,
                item.category.as_str(),
                item.name,
                item.status.as_str(),
                item.notes,
                item.severity.as_str(),
                position as i64,
            ],
        ).context("Failed to insert safety item")?;
    }

    tx.commit().context("Failed to commit safety check")?;

    Ok(())
}

pub fn select_safety_check(conn: &Connection, id: &str) -> Result<Option<SafetyCheck>> {
    let mut stmt = conn
        .prepare("SELECT id, product_name, age_group, overall_score, passed, recommendations FROM safety_checks WHERE id = ?")
        .context("Failed to prepare select safety check query")?;

    let header = stmt
        .query_row(params![id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, i32>(3)?,
                row.get::<_, bool>(4)?,
                row.get::<_, String>(5)?,
            ))
        })
        .optional()
        .context("Failed to query safety check")?;

    let (check_id, product_name, age_group_raw, overall_score, passed, recommendations_raw) =
        match header {
            Some(row) => row,
            None => return Ok(None),
        };

    let age_group = AgeGroup::from_str(&age_group_raw)
        .with_context(|| format!("Unknown age group '{}' in check {}", age_group_raw, check_id))?;

    let recommendations: Vec<String> = serde_json::from_str(&recommendations_raw)
        .context("Failed to parse stored recommendations")?;

    let items = select_safety_items(conn, &check_id)?;

    Ok(Some(SafetyCheck {
        id: check_id,
        product_name,
        age_group,
        items,
        overall_score,
        recommendations,
        passed,
    }))
}

/// Items are stored with an explicit position so the report keeps its
/// category order when loaded back
fn select_safety_items(conn: &Connection, check_id: &str) -> Result<Vec<SafetyItem>> {
    let mut stmt = conn
        .prepare("SELECT category, name, status, notes, severity FROM safety_items WHERE check_id = ? ORDER BY position")
        .context("Failed to prepare select safety items query")?;

    let rows = stmt
        .query_map(params![check_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })
        .context("Failed to map safety items from query")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .context("Failed to collect safety items")?;

    let mut items = Vec::with_capacity(rows.len());
    for (category, name, status, notes, severity) in rows {
        items.push(SafetyItem {
            category: SafetyCategory::from_str(&category)
                .with_context(|| format!("Unknown category '{}' in stored item", category))?,
            name,
            status: CheckStatus::from_str(&status)
                .with_context(|| format!("Unknown status '{}' in stored item", status))?,
            notes,
            severity: Severity::from_str(&severity)
                .with_context(|| format!("Unknown severity '{}' in stored item", severity))?,
        });
    }

    Ok(items)
}

pub fn select_safety_check_summaries(conn: &Connection) -> Result<Vec<SafetyCheckSummary>> {
    let mut stmt = conn
        .prepare("SELECT id, product_name, age_group, overall_score, passed, created_at FROM safety_checks ORDER BY created_at DESC, rowid DESC")
        .context("Failed to prepare select summaries query")?;

    let summaries = stmt
        .query_map([], |row| {
            Ok(SafetyCheckSummary {
                id: row.get(0)?,
                product_name: row.get(1)?,
                age_group: row.get(2)?,
                overall_score: row.get(3)?,
                passed: row.get(4)?,
                created_at: row.get(5)?,
            })
        })
        .context("Failed to map summaries from query")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .context("Failed to collect summaries")?;

    Ok(summaries)
}

/// Full reports for every stored check, newest first (used by export)
pub fn select_all_safety_checks(conn: &Connection) -> Result<Vec<SafetyCheck>> {
    let summaries = select_safety_check_summaries(conn)?;

    let mut checks = Vec::with_capacity(summaries.len());
    for summary in summaries {
        if let Some(check) = select_safety_check(conn, &summary.id)? {
            checks.push(check);
        }
    }

    Ok(checks)
}

// ===== STANDARD QUERIES =====

const STANDARD_COLUMNS: &str = "id, code, name, version, category, area, region, applicable_age, applicable_weight, scope, effective_date, status, source";

struct StandardRow {
    id: String,
    code: String,
    name: String,
    version: String,
    category: String,
    area: String,
    region: String,
    applicable_age: String,
    applicable_weight: String,
    scope: String,
    effective_date: String,
    status: String,
    source: String,
}

fn read_standard_row(row: &rusqlite::Row) -> rusqlite::Result<StandardRow> {
    Ok(StandardRow {
        id: row.get(0)?,
        code: row.get(1)?,
        name: row.get(2)?,
        version: row.get(3)?,
        category: row.get(4)?,
        area: row.get(5)?,
        region: row.get(6)?,
        applicable_age: row.get(7)?,
        applicable_weight: row.get(8)?,
        scope: row.get(9)?,
        effective_date: row.get(10)?,
        status: row.get(11)?,
        source: row.get(12)?,
    })
}

fn into_standard(row: StandardRow) -> Result<StandardRecord> {
    let category = StandardCategory::from_str(&row.category)
        .with_context(|| format!("Unknown standard category '{}'", row.category))?;
    let area = ProductArea::from_str(&row.area)
        .with_context(|| format!("Unknown product area '{}'", row.area))?;

    Ok(StandardRecord {
        id: row.id,
        code: row.code,
        name: row.name,
        version: row.version,
        category,
        area,
        region: row.region,
        applicable_age: row.applicable_age,
        applicable_weight: row.applicable_weight,
        scope: row.scope,
        effective_date: row.effective_date,
        status: row.status,
        source: row.source,
    })
}

pub fn select_standard(conn: &Connection, id: &str, area: ProductArea) -> Result<Option<StandardRecord>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {} FROM standards WHERE id = ? AND area = ?",
            STANDARD_COLUMNS
        ))
        .context("Failed to prepare select standard query")?;

    let row = stmt
        .query_row(params![id, area.as_str()], read_standard_row)
        .optional()
        .context("Failed to query standard")?;

    match row {
        Some(row) => Ok(Some(into_standard(row)?)),
        None => Ok(None),
    }
}

pub fn select_active_standards(conn: &Connection, area: Option<ProductArea>) -> Result<Vec<StandardRecord>> {
    let rows = match area {
        Some(area) => {
            let mut stmt = conn
                .prepare(&format!(
                    "SELECT {} FROM standards WHERE status = 'current' AND area = ? ORDER BY code",
                    STANDARD_COLUMNS
                ))
                .context("Failed to prepare select active standards query")?;

            let rows = stmt
                .query_map(params![area.as_str()], read_standard_row)
                .context("Failed to map standards from query")?
                .collect::<std::result::Result<Vec<_>, _>>()
                .context("Failed to collect standards")?;
            rows
        }
        None => {
            let mut stmt = conn
                .prepare(&format!(
                    "SELECT {} FROM standards WHERE status = 'current' ORDER BY area, code",
                    STANDARD_COLUMNS
                ))
                .context("Failed to prepare select active standards query")?;

            let rows = stmt
                .query_map([], read_standard_row)
                .context("Failed to map standards from query")?
                .collect::<std::result::Result<Vec<_>, _>>()
                .context("Failed to collect standards")?;
            rows
        }
    };

    rows.into_iter().map(into_standard).collect()
}

/// Case-insensitive substring search over standard codes and names
pub fn search_standards(
    conn: &Connection,
    query: &str,
    area: Option<ProductArea>,
) -> Result<Vec<StandardRecord>> {
    let pattern = format!("%{}%", query);

    let rows = match area {
        Some(area) => {
            let mut stmt = conn
                .prepare(&format!(
                    "SELECT {} FROM standards WHERE area = ? AND (code LIKE ? OR name LIKE ?) ORDER BY code",
                    STANDARD_COLUMNS
                ))
                .context("Failed to prepare search standards query")?;

            let rows = stmt
                .query_map(params![area.as_str(), pattern, pattern], read_standard_row)
                .context("Failed to map standards from query")?
                .collect::<std::result::Result<Vec<_>, _>>()
                .context("Failed to collect standards")?;
            rows
        }
        None => {
            let mut stmt = conn
                .prepare(&format!(
                    "SELECT {} FROM standards WHERE code LIKE ? OR name LIKE ? ORDER BY area, code",
                    STANDARD_COLUMNS
                ))
                .context("Failed to prepare search standards query")?;

            let rows = stmt
                .query_map(params![pattern, pattern], read_standard_row)
                .context("Failed to map standards from query")?
                .collect::<std::result::Result<Vec<_>, _>>()
                .context("Failed to collect standards")?;
            rows
        }
    };

    rows.into_iter().map(into_standard).collect()
}

/// Summaries for a set of catalog ids
///
/// Ids not present in either catalog are skipped. High chair matches
/// come before crib matches
pub fn select_standard_summaries(conn: &Connection, ids: &[String]) -> Result<Vec<StandardSummary>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders = vec!["?"; ids.len()].join(", ");
    let mut summaries = Vec::new();

    for area in [ProductArea::HighChair, ProductArea::Crib] {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM standards WHERE area = ? AND id IN ({}) ORDER BY code",
                STANDARD_COLUMNS, placeholders
            ))
            .context("Failed to prepare select standard summaries query")?;

        let bindings = std::iter::once(area.as_str()).chain(ids.iter().map(String::as_str));
        let rows = stmt
            .query_map(rusqlite::params_from_iter(bindings), read_standard_row)
            .context("Failed to map standards from query")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .context("Failed to collect standards")?;

        for row in rows {
            summaries.push(into_standard(row)?.summary());
        }
    }

    Ok(summaries)
}

// ===== SETTINGS CRUD =====

pub fn insert_or_update_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    let updated_at = chrono::Utc::now().to_rfc3339();
    conn.execute(
        "INSERT OR REPLACE INTO settings (key, value, updated_at) VALUES (?, ?, ?)",
        params![key, value, updated_at],
    ).context("Failed to insert or update setting")?;

    Ok(())
}

pub fn select_setting(conn: &Connection, key: &str) -> Result<Option<Settings>> {
    let mut stmt = conn
        .prepare("SELECT key, value, updated_at FROM settings WHERE key = ?")
        .context("Failed to prepare select setting query")?;

    let setting = stmt
        .query_row(params![key], |row| {
            Ok(Settings {
                key: row.get(0)?,
                value: row.get(1)?,
                updated_at: row.get(2)?,
            })
        })
        .optional()
        .context("Failed to query setting")?;

    Ok(setting)
}

pub fn select_all_settings(conn: &Connection) -> Result<Vec<Settings>> {
    let mut stmt = conn
        .prepare("SELECT key, value, updated_at FROM settings ORDER BY key")
        .context("Failed to prepare select settings query")?;

    let settings = stmt
        .query_map([], |row| {
            Ok(Settings {
                key: row.get(0)?,
                value: row.get(1)?,
                updated_at: row.get(2)?,
            })
        })
        .context("Failed to map settings from query")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .context("Failed to collect settings")?;

    Ok(settings)
}

// ===== AUDIT EVENT CRUD =====

pub fn insert_audit_event(conn: &Connection, event: &AuditEvent) -> Result<i64> {
    conn.execute(
        "INSERT INTO audit_events (event_type, check_id, update_id, description, metadata) VALUES (?, ?, ?, ?, ?)",
        params![
            event.event_type,
            event.check_id,
            event.update_id,
            event.description,
            event.metadata,
        ],
    ).context("Failed to insert audit event")?;

    Ok(conn.last_insert_rowid())
}

pub fn select_audit_events(conn: &Connection, limit: i64) -> Result<Vec<AuditEvent>> {
    let mut stmt = conn
        .prepare("SELECT id, event_type, check_id, update_id, description, metadata, created_at FROM audit_events ORDER BY created_at DESC, id DESC LIMIT ?")
        .context("Failed to prepare select audit events query")?;

    let events = stmt
        .query_map(params![limit], |row| {
            Ok(AuditEvent {
                id: row.get(0)?,
                event_type: row.get(1)?,
                check_id: row.get(2)?,
                update_id: row.get(3)?,
                description: row.get(4)?,
                metadata: row.get(5)?,
                created_at: row.get(6)?,
            })
        })
        .context("Failed to map audit events from query")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .context("Failed to collect audit events")?;

    Ok(events)
}

pub fn select_audit_events_by_type(conn: &Connection, event_type: &str, limit: i64) -> Result<Vec<AuditEvent>> {
    let mut stmt = conn
        .prepare("SELECT id, event_type, check_id, update_id, description, metadata, created_at FROM audit_events WHERE event_type = ? ORDER BY created_at DESC, id DESC LIMIT ?")
        .context("Failed to prepare select audit events query")?;

    let events = stmt
        .query_map(params![event_type, limit], |row| {
            Ok(AuditEvent {
                id: row.get(0)?,
                event_type: row.get(1)?,
                check_id: row.get(2)?,
                update_id: row.get(3)?,
                description: row.get(4)?,
                metadata: row.get(5)?,
                created_at: row.get(6)?,
            })
        })
        .context("Failed to map audit events from query")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .context("Failed to collect audit events")?;

    Ok(events)
}

// ===== MAINTENANCE =====

/// Remove stored checks and the audit trail
/// The standards catalog and settings survive a clear
pub fn clear_database(conn: &Connection) -> Result<()> {
    // Items go with their checks via ON DELETE CASCADE
    conn.execute("DELETE FROM safety_checks", [])
        .context("Failed to clear safety checks")?;

    conn.execute("DELETE FROM audit_events", [])
        .context("Failed to clear audit events")?;

    Ok(())
}
