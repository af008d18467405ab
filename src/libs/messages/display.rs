//! Display implementation for trackle application messages.
//!
//! All user-facing text lives here, so wording stays in one place and the
//! rest of the code deals only in typed `Message` values.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(name) => format!("Task '{}' created", name),
            Message::TaskUpdated(name) => format!("Task '{}' updated", name),
            Message::TaskDeleted(name) => format!("Task '{}' and all its entries deleted", name),
            Message::TaskArchived(name) => format!("Task '{}' archived", name),
            Message::TaskRestored(name) => format!("Task '{}' restored", name),
            Message::TaskNotFound(id) => format!("Task with ID {} not found", id),
            Message::TaskNotFoundByName(name) => format!("Task '{}' not found", name),
            Message::TaskNameEmpty => "Task name cannot be empty".to_string(),
            Message::TaskNameTaken(name) => format!("A task named '{}' already exists", name),
            Message::NoTasksFound => "No tasks yet. Create one with 'trackle task add'".to_string(),
            Message::ConfirmDeleteTask(name) => format!("Delete task '{}' and ALL of its time entries?", name),
            Message::TaskDeleteAborted => "Deletion cancelled".to_string(),

            // === TIMER MESSAGES ===
            Message::TimerStarted(task) => format!("Timer started for '{}'", task),
            Message::TimerPaused(task) => format!("Timer paused for '{}'", task),
            Message::TimerResumed(task) => format!("Timer resumed for '{}'", task),
            Message::TimerStopped(task, total) => format!("Timer stopped for '{}' after {}", task, total),
            Message::TimerAlreadyRunning(task) => format!("A timer is already running for '{}'. Stop it first.", task),
            Message::NoActiveTimer => "No timer is running".to_string(),
            Message::EntryNotFound(id) => format!("Entry with ID {} not found", id),
            Message::EntryNotActive(id) => format!("Entry {} is not active and cannot be paused", id),
            Message::EntryNotPaused(id) => format!("Entry {} is not paused and cannot be resumed", id),
            Message::EntryAlreadyCompleted(id) => format!("Entry {} is already completed", id),

            // === ENTRY MESSAGES ===
            Message::ManualEntryAdded(task, duration) => format!("Added {} to '{}'", duration, task),
            Message::ManualEntryInvalidRange => "End time must be after start time".to_string(),
            Message::EntryDeleted(id) => format!("Entry {} deleted", id),
            Message::EntryNotesUpdated(id) => format!("Notes updated for entry {}", id),
            Message::NoEntriesForPeriod => "No entries for this period".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Entries exported to: {}", path),
            Message::ExportNothingToExport => "Nothing to export for this period".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Applying migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} applied", version),
            Message::MigrationFailed(version, err) => format!("Migration v{} failed: {}", version, err),
            Message::AllMigrationsCompleted => "Database schema is up to date".to_string(),
        };
        write!(f, "{}", text)
    }
}
