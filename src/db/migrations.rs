//! Database schema migration management.
//!
//! Versioned, forward-only migrations tracked in a `migrations` table.
//! Pending migrations are applied within a single transaction every time a
//! connection is opened; an up-to-date database is a cheap no-op. Each
//! migration uses create-if-not-exists semantics so re-running against a
//! database created by an older build is safe.

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all schema migrations in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: core tables and indices.
        // tasks own entries, entries own segments; both cascades are
        // delegated to SQLite (foreign_keys pragma is set per connection).
        self.add_migration(1, "create_core_tables", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL UNIQUE,
        color TEXT DEFAULT '#4CAF50',
        is_active INTEGER DEFAULT 1,
        created_at TIMESTAMP DEFAULT (datetime('now', 'localtime'))
    )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS time_entries (
        id INTEGER PRIMARY KEY,
        task_id INTEGER NOT NULL,
        start_time TIMESTAMP NOT NULL,
        end_time TIMESTAMP,
        status TEXT NOT NULL DEFAULT 'active'
            CHECK(status IN ('active', 'paused', 'completed')),
        total_seconds REAL DEFAULT 0,
        notes TEXT DEFAULT '',
        FOREIGN KEY (task_id) REFERENCES tasks(id) ON DELETE CASCADE
    )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS time_segments (
        id INTEGER PRIMARY KEY,
        entry_id INTEGER NOT NULL,
        segment_start TIMESTAMP NOT NULL,
        segment_end TIMESTAMP,
        FOREIGN KEY (entry_id) REFERENCES time_entries(id) ON DELETE CASCADE
    )",
                [],
            )?;

            // Range queries bucket completed entries by start date
            tx.execute("CREATE INDEX IF NOT EXISTS idx_entries_start_time ON time_entries(start_time)", [])?;
            // The single-live-timer check scans by status
            tx.execute("CREATE INDEX IF NOT EXISTS idx_entries_status ON time_entries(status)", [])?;
            // Segment lookups are always per entry
            tx.execute("CREATE INDEX IF NOT EXISTS idx_segments_entry ON time_segments(entry_id)", [])?;

            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies all pending migrations inside one transaction.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!("Database is up to date");
            return Ok(());
        }

        msg_debug!(format!("{}", Message::MigrationsFound(pending.len())));

        let tx = conn.transaction()?;
        for migration in pending {
            msg_debug!(format!("{}", Message::RunningMigration(migration.version, migration.name.to_string())));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    msg_debug!(format!("{}", Message::MigrationCompleted(migration.version)));
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }
        tx.commit()?;
        msg_info!(Message::AllMigrationsCompleted);

        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0)).unwrap_or(Some(0));
        Ok(version.unwrap_or(0))
    }
}

/// Brings a connection up to the latest schema version.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

/// Current schema version, 0 for a fresh database.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().get_current_version(conn)
}
