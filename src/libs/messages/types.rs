#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted(String),
    TaskArchived(String),
    TaskRestored(String),
    TaskNotFound(i64),
    TaskNotFoundByName(String),
    TaskNameEmpty,
    TaskNameTaken(String),
    NoTasksFound,
    ConfirmDeleteTask(String),
    TaskDeleteAborted,

    // === TIMER MESSAGES ===
    TimerStarted(String),
    TimerPaused(String),
    TimerResumed(String),
    TimerStopped(String, String), // task name, formatted total
    TimerAlreadyRunning(String),
    NoActiveTimer,
    EntryNotFound(i64),
    EntryNotActive(i64),
    EntryNotPaused(i64),
    EntryAlreadyCompleted(i64),

    // === ENTRY MESSAGES ===
    ManualEntryAdded(String, String), // task name, formatted duration
    ManualEntryInvalidRange,
    EntryDeleted(i64),
    EntryNotesUpdated(i64),
    NoEntriesForPeriod,

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
    ExportNothingToExport,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
}
