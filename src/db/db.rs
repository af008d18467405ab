use crate::db::migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "trackle.db";

/// A bootstrapped database connection.
///
/// Opening it resolves the platform data directory, enables foreign-key
/// enforcement (entry and segment cascades depend on it) and applies any
/// pending schema migrations. All of this is idempotent, so every
/// repository struct simply opens its own connection through here.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let mut conn = Connection::open(db_file_path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON")?;
        migrations::init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
