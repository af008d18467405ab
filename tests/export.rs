#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use trackle::db::entries::Entries;
    use trackle::db::tasks::Tasks;
    use trackle::libs::export::{ExportFormat, ExportRow, Exporter};
    use trackle::libs::task::Task;

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

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn seed_entries() {
        let mut tasks = Tasks::new().unwrap();
        let client = tasks.create(&Task::new("Client A", "#4CAF50")).unwrap();
        let meetings = tasks.create(&Task::new("Meetings", "#2196F3")).unwrap();
        let mut entries = Entries::new().unwrap();

        // 1h20m = 1.33 h once rounded
        entries
            .add_manual(client, day().and_hms_opt(9, 0, 0).unwrap(), day().and_hms_opt(10, 20, 0).unwrap(), "spec review")
            .unwrap();
        entries
            .add_manual(meetings, day().and_hms_opt(14, 0, 0).unwrap(), day().and_hms_opt(15, 30, 0).unwrap(), "weekly sync")
            .unwrap();
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_csv_export(ctx: &mut DbTestContext) {
        seed_entries();
        let mut entries = Entries::new().unwrap();
        let records = entries.fetch_range(day(), day()).unwrap();
        assert_eq!(records.len(), 2);

        let path = ctx._temp_dir.path().join("out.csv");
        Exporter::new(ExportFormat::Csv, Some(path.clone())).export(&records).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("Task,Start,End,Hours,Notes"));

        // Newest first, hours rounded to two decimals
        assert_eq!(lines.next(), Some("Meetings,2025-03-10 14:00:00,2025-03-10 15:30:00,1.5,weekly sync"));
        assert_eq!(lines.next(), Some("Client A,2025-03-10 09:00:00,2025-03-10 10:20:00,1.33,spec review"));
        assert_eq!(lines.next(), None);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_json_export(ctx: &mut DbTestContext) {
        seed_entries();
        let mut entries = Entries::new().unwrap();
        let records = entries.fetch_range(day(), day()).unwrap();

        let path = ctx._temp_dir.path().join("out.json");
        Exporter::new(ExportFormat::Json, Some(path.clone())).export(&records).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let rows: Vec<ExportRow> = serde_json::from_str(&content).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].task, "Meetings");
        assert_eq!(rows[0].hours, 1.5);
        assert_eq!(rows[1].task, "Client A");
        assert_eq!(rows[1].hours, 1.33);
        assert_eq!(rows[1].start, "2025-03-10 09:00:00");
        assert_eq!(rows[1].end, "2025-03-10 10:20:00");
        assert_eq!(rows[1].notes, "spec review");
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_csv_export_of_empty_range(ctx: &mut DbTestContext) {
        let path = ctx._temp_dir.path().join("empty.csv");
        Exporter::new(ExportFormat::Csv, Some(path.clone())).export(&[]).unwrap();

        // No rows were serialized, so not even a header is written
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.is_empty());
    }
}
