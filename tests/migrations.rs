#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use trackle::db::db::Db;
    use trackle::db::migrations::get_db_version;

    // Tests share the process environment; serialize HOME redirection.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct DbTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for DbTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            DbTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    fn table_names(db: &Db) -> Vec<String> {
        let mut stmt = db
            .conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap();
        let names = stmt.query_map([], |row| row.get::<_, String>(0)).unwrap();
        names.map(|n| n.unwrap()).collect()
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_fresh_database_schema(_ctx: &mut DbTestContext) {
        let db = Db::new().unwrap();

        assert_eq!(get_db_version(&db.conn).unwrap(), 1);

        let tables = table_names(&db);
        for table in ["migrations", "tasks", "time_entries", "time_segments"] {
            assert!(tables.iter().any(|t| t == table), "missing table {}", table);
        }
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_reopening_is_idempotent(_ctx: &mut DbTestContext) {
        {
            let db = Db::new().unwrap();
            assert_eq!(get_db_version(&db.conn).unwrap(), 1);
        }
        let db = Db::new().unwrap();
        assert_eq!(get_db_version(&db.conn).unwrap(), 1);

        // The version-1 migration was recorded exactly once
        let count: i64 = db
            .conn
            .query_row("SELECT COUNT(*) FROM migrations WHERE version = 1", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_foreign_keys_enforced(_ctx: &mut DbTestContext) {
        let db = Db::new().unwrap();

        let result = db.conn.execute(
            "INSERT INTO time_entries (task_id, start_time) VALUES (999, '2025-03-10T09:00:00')",
            [],
        );
        assert!(result.is_err());
    }
}
