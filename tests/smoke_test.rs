//! Smoke test: fresh database comes up migrated and seeded.

mod common;

use common::TestEnv;

#[test]
#[serial_test::serial]
fn test_fresh_database_is_ready() {
    let env = TestEnv::new().expect("database should initialize");

    assert_eq!(env.schema_version().unwrap(), 2);

    for table in ["safety_checks", "safety_items", "audit_events", "settings", "standards"] {
        assert!(env.table_exists(table).unwrap(), "missing table: {}", table);
    }

    assert_eq!(env.count_rows("standards").unwrap(), 10);
    assert_eq!(env.count_rows("safety_checks").unwrap(), 0);
    assert_eq!(env.get_setting("notifications_enabled").unwrap().as_deref(), Some("true"));
}
