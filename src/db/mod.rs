//! Database layer for the trackle application.
//!
//! A SQLite-backed persistence layer split by concern: connection
//! bootstrap, versioned migrations, task CRUD, the timer/entry state
//! machine and the aggregation queries the reports are built from.
//! Every operation is a short-lived transaction on its own connection;
//! there is no background process, and "elapsed time" for a running entry
//! is computed lazily from segment boundaries on each read.

/// Connection bootstrap: data-dir resolution, foreign keys, migrations.
pub mod db;

/// Versioned schema migration system.
pub mod migrations;

/// Task CRUD with trimmed-name uniqueness and cascade deletion.
pub mod tasks;

/// The timer state machine, manual entries and range queries.
pub mod entries;

/// Daily, per-range and per-task aggregation over completed entries.
pub mod stats;
