#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use trackle::commands::stats::{period_range, Period};
    use trackle::db::entries::Entries;
    use trackle::db::stats::Stats;
    use trackle::db::tasks::Tasks;
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

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn seed_manual(entries: &mut Entries, task_id: i64, d: u32, start_h: u32, end_h: u32) {
        entries
            .add_manual(
                task_id,
                date(d).and_hms_opt(start_h, 0, 0).unwrap(),
                date(d).and_hms_opt(end_h, 0, 0).unwrap(),
                "",
            )
            .unwrap();
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_daily_totals_and_breakdown(_ctx: &mut DbTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let client = tasks.create(&Task::new("Client A", "#4CAF50")).unwrap();
        let meetings = tasks.create(&Task::new("Meetings", "#2196F3")).unwrap();
        let mut entries = Entries::new().unwrap();

        seed_manual(&mut entries, client, 10, 9, 12); // 3h
        seed_manual(&mut entries, client, 10, 13, 14); // 1h
        seed_manual(&mut entries, meetings, 10, 14, 16); // 2h
        seed_manual(&mut entries, client, 11, 9, 10); // other day, excluded

        let mut stats = Stats::new().unwrap();
        let daily = stats.daily(date(10)).unwrap();

        assert_eq!(daily.total_seconds, 6.0 * 3600.0);
        assert_eq!(daily.entry_count, 3);
        assert_eq!(daily.first_start, date(10).and_hms_opt(9, 0, 0));
        assert_eq!(daily.last_end, date(10).and_hms_opt(16, 0, 0));

        // Per-task breakdown, biggest share first
        assert_eq!(daily.tasks.len(), 2);
        assert_eq!(daily.tasks[0].name, "Client A");
        assert_eq!(daily.tasks[0].total_seconds, 4.0 * 3600.0);
        assert_eq!(daily.tasks[0].entry_count, 2);
        assert_eq!(daily.tasks[1].name, "Meetings");
        assert_eq!(daily.tasks[1].total_seconds, 2.0 * 3600.0);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_daily_on_empty_day(_ctx: &mut DbTestContext) {
        let mut stats = Stats::new().unwrap();
        let daily = stats.daily(date(10)).unwrap();

        assert_eq!(daily.total_seconds, 0.0);
        assert_eq!(daily.entry_count, 0);
        assert!(daily.first_start.is_none());
        assert!(daily.last_end.is_none());
        assert!(daily.tasks.is_empty());
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_live_entries_excluded_from_aggregates(_ctx: &mut DbTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let client = tasks.create(&Task::new("Client A", "#4CAF50")).unwrap();
        let mut entries = Entries::new().unwrap();

        seed_manual(&mut entries, client, 10, 9, 10);
        // Still running, must not count
        entries.start_at(client, "", date(10).and_hms_opt(11, 0, 0).unwrap()).unwrap();

        let mut stats = Stats::new().unwrap();
        let daily = stats.daily(date(10)).unwrap();
        assert_eq!(daily.total_seconds, 3600.0);
        assert_eq!(daily.entry_count, 1);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_range_skips_empty_days(_ctx: &mut DbTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let client = tasks.create(&Task::new("Client A", "#4CAF50")).unwrap();
        let mut entries = Entries::new().unwrap();

        seed_manual(&mut entries, client, 10, 9, 11);
        seed_manual(&mut entries, client, 12, 9, 10);
        seed_manual(&mut entries, client, 12, 14, 15);

        let mut stats = Stats::new().unwrap();
        let days = stats.range(date(9), date(13)).unwrap();

        // Ascending, only days with work
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].day, date(10));
        assert_eq!(days[0].total_seconds, 2.0 * 3600.0);
        assert_eq!(days[0].entry_count, 1);
        assert_eq!(days[1].day, date(12));
        assert_eq!(days[1].total_seconds, 2.0 * 3600.0);
        assert_eq!(days[1].entry_count, 2);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_distribution_descending(_ctx: &mut DbTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let client = tasks.create(&Task::new("Client A", "#4CAF50")).unwrap();
        let meetings = tasks.create(&Task::new("Meetings", "#2196F3")).unwrap();
        let admin = tasks.create(&Task::new("Admin", "#9E9E9E")).unwrap();
        let mut entries = Entries::new().unwrap();

        seed_manual(&mut entries, meetings, 10, 9, 10); // 1h
        seed_manual(&mut entries, client, 10, 10, 15); // 5h
        seed_manual(&mut entries, admin, 11, 9, 12); // 3h

        let mut stats = Stats::new().unwrap();
        let dist = stats.distribution(date(10), date(11)).unwrap();

        assert_eq!(dist.len(), 3);
        assert_eq!(dist[0].name, "Client A");
        assert_eq!(dist[1].name, "Admin");
        assert_eq!(dist[2].name, "Meetings");
        assert!(dist.windows(2).all(|w| w[0].total_seconds >= w[1].total_seconds));
    }

    #[test]
    fn test_period_ranges() {
        // 2025-03-12 is a Wednesday
        let today = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();

        assert_eq!(period_range(Period::Today, today), (today, today));

        let (from, to) = period_range(Period::Week, today);
        assert_eq!(from, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
        assert_eq!(to, NaiveDate::from_ymd_opt(2025, 3, 16).unwrap());

        let (from, to) = period_range(Period::Month, today);
        assert_eq!(from, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(to, NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());

        let (from, to) = period_range(Period::Year, today);
        assert_eq!(from, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(to, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    }

    #[test]
    fn test_period_month_clamps_february() {
        let today = NaiveDate::from_ymd_opt(2025, 2, 5).unwrap();
        let (from, to) = period_range(Period::Month, today);
        assert_eq!(from, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        assert_eq!(to, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
    }
}
