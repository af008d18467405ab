//! Time entry lifecycle and segment accounting.
//!
//! This is the timer state machine: start creates an active entry with an
//! open segment, pause closes the open segment, resume opens a new one,
//! stop closes whatever is open and fixes `total_seconds` from the segment
//! sums. The store-wide invariant (at most one entry in status active or
//! paused) is checked inside the same transaction as the insert, so a
//! failed start leaves no trace.
//!
//! Every mutating operation has an `*_at` variant taking an explicit
//! timestamp; the plain form passes the local wall clock. Tests drive the
//! `*_at` variants for determinism.

use crate::db::db::Db;
use crate::libs::entry::{ActiveEntry, EntryRecord, EntryStatus, TimeEntry, TimeSegment};
use crate::libs::error::TrackerError;
use crate::libs::messages::Message;
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction};

const SELECT_LIVE_TASK_NAME: &str = "
    SELECT t.name FROM time_entries te JOIN tasks t ON te.task_id = t.id
    WHERE te.status IN ('active', 'paused') LIMIT 1";
const SELECT_TASK_NAME: &str = "SELECT name FROM tasks WHERE id = ?1";
const INSERT_ENTRY: &str = "INSERT INTO time_entries (task_id, start_time, status, notes) VALUES (?1, ?2, 'active', ?3)";
const INSERT_MANUAL_ENTRY: &str = "
    INSERT INTO time_entries (task_id, start_time, end_time, status, total_seconds, notes)
    VALUES (?1, ?2, ?3, 'completed', ?4, ?5)";
const INSERT_OPEN_SEGMENT: &str = "INSERT INTO time_segments (entry_id, segment_start) VALUES (?1, ?2)";
const INSERT_CLOSED_SEGMENT: &str = "INSERT INTO time_segments (entry_id, segment_start, segment_end) VALUES (?1, ?2, ?3)";
const CLOSE_OPEN_SEGMENT: &str = "UPDATE time_segments SET segment_end = ?2 WHERE entry_id = ?1 AND segment_end IS NULL";
const SET_STATUS: &str = "UPDATE time_entries SET status = ?2 WHERE id = ?1";
const SELECT_STATUS: &str = "SELECT status FROM time_entries WHERE id = ?1";
const SELECT_SEGMENT_BOUNDS: &str = "SELECT segment_start, segment_end FROM time_segments WHERE entry_id = ?1";
const COMPLETE_ENTRY: &str = "UPDATE time_entries SET status = 'completed', end_time = ?2, total_seconds = ?3 WHERE id = ?1";
const SELECT_ACTIVE: &str = "
    SELECT te.id, te.task_id, te.start_time, te.end_time, te.status, te.total_seconds, te.notes,
           t.name, t.color
    FROM time_entries te JOIN tasks t ON te.task_id = t.id
    WHERE te.status IN ('active', 'paused')
    ORDER BY te.start_time DESC LIMIT 1";
const SELECT_ENTRY: &str = "
    SELECT id, task_id, start_time, end_time, status, total_seconds, notes
    FROM time_entries WHERE id = ?1";
const SELECT_SEGMENTS: &str = "
    SELECT id, entry_id, segment_start, segment_end
    FROM time_segments WHERE entry_id = ?1 ORDER BY segment_start";
const SELECT_RANGE: &str = "
    SELECT te.id, te.task_id, t.name, t.color, te.start_time, te.end_time, te.total_seconds, te.notes
    FROM time_entries te JOIN tasks t ON te.task_id = t.id
    WHERE te.status = 'completed'
      AND DATE(te.start_time) >= ?1 AND DATE(te.start_time) <= ?2
    ORDER BY te.start_time DESC";
const DELETE_SEGMENTS: &str = "DELETE FROM time_segments WHERE entry_id = ?1";
const DELETE_ENTRY: &str = "DELETE FROM time_entries WHERE id = ?1";
const UPDATE_NOTES: &str = "UPDATE time_entries SET notes = ?2 WHERE id = ?1";

pub struct Entries {
    conn: Connection,
}

impl Entries {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Starts a new timer for `task_id`. Fails with Conflict if any entry
    /// anywhere in the store is still active or paused.
    pub fn start(&mut self, task_id: i64, notes: &str) -> Result<i64> {
        self.start_at(task_id, notes, Local::now().naive_local())
    }

    pub fn start_at(&mut self, task_id: i64, notes: &str, now: NaiveDateTime) -> Result<i64> {
        let tx = self.conn.transaction()?;

        let task: Option<String> = tx.query_row(SELECT_TASK_NAME, params![task_id], |row| row.get(0)).optional()?;
        if task.is_none() {
            return Err(TrackerError::NotFound(Message::TaskNotFound(task_id)).into());
        }
        let live: Option<String> = tx.query_row(SELECT_LIVE_TASK_NAME, [], |row| row.get(0)).optional()?;
        if let Some(name) = live {
            return Err(TrackerError::Conflict(Message::TimerAlreadyRunning(name)).into());
        }

        tx.execute(INSERT_ENTRY, params![task_id, now, notes])?;
        let entry_id = tx.last_insert_rowid();
        tx.execute(INSERT_OPEN_SEGMENT, params![entry_id, now])?;
        tx.commit()?;
        Ok(entry_id)
    }

    /// Pauses an active entry: closes its open segment and freezes the
    /// elapsed value until resume.
    pub fn pause(&mut self, entry_id: i64) -> Result<()> {
        self.pause_at(entry_id, Local::now().naive_local())
    }

    pub fn pause_at(&mut self, entry_id: i64, now: NaiveDateTime) -> Result<()> {
        let tx = self.conn.transaction()?;
        match Self::status_of(&tx, entry_id)? {
            EntryStatus::Active => {}
            EntryStatus::Completed => return Err(TrackerError::Conflict(Message::EntryAlreadyCompleted(entry_id)).into()),
            EntryStatus::Paused => return Err(TrackerError::Conflict(Message::EntryNotActive(entry_id)).into()),
        }
        tx.execute(CLOSE_OPEN_SEGMENT, params![entry_id, now])?;
        tx.execute(SET_STATUS, params![entry_id, EntryStatus::Paused.as_str()])?;
        tx.commit()?;
        Ok(())
    }

    /// Resumes a paused entry by opening a fresh segment.
    pub fn resume(&mut self, entry_id: i64) -> Result<()> {
        self.resume_at(entry_id, Local::now().naive_local())
    }

    pub fn resume_at(&mut self, entry_id: i64, now: NaiveDateTime) -> Result<()> {
        let tx = self.conn.transaction()?;
        match Self::status_of(&tx, entry_id)? {
            EntryStatus::Paused => {}
            EntryStatus::Completed => return Err(TrackerError::Conflict(Message::EntryAlreadyCompleted(entry_id)).into()),
            EntryStatus::Active => return Err(TrackerError::Conflict(Message::EntryNotPaused(entry_id)).into()),
        }
        tx.execute(INSERT_OPEN_SEGMENT, params![entry_id, now])?;
        tx.execute(SET_STATUS, params![entry_id, EntryStatus::Active.as_str()])?;
        tx.commit()?;
        Ok(())
    }

    /// Stops an active or paused entry. Closes any open segment, then
    /// fixes `total_seconds` as the sum over all fully-bounded segments.
    /// Segments missing an endpoint contribute zero instead of failing.
    pub fn stop(&mut self, entry_id: i64) -> Result<f64> {
        self.stop_at(entry_id, Local::now().naive_local())
    }

    pub fn stop_at(&mut self, entry_id: i64, now: NaiveDateTime) -> Result<f64> {
        let tx = self.conn.transaction()?;
        match Self::status_of(&tx, entry_id)? {
            EntryStatus::Active | EntryStatus::Paused => {}
            EntryStatus::Completed => return Err(TrackerError::Conflict(Message::EntryAlreadyCompleted(entry_id)).into()),
        }
        tx.execute(CLOSE_OPEN_SEGMENT, params![entry_id, now])?;

        let mut total = 0.0_f64;
        {
            let mut stmt = tx.prepare(SELECT_SEGMENT_BOUNDS)?;
            let bounds = stmt.query_map(params![entry_id], |row| {
                Ok((row.get::<_, NaiveDateTime>(0)?, row.get::<_, Option<NaiveDateTime>>(1)?))
            })?;
            for bound in bounds {
                let (start, end) = bound?;
                if let Some(end) = end {
                    total += (end - start).num_milliseconds() as f64 / 1000.0;
                }
            }
        }

        tx.execute(COMPLETE_ENTRY, params![entry_id, now, total])?;
        tx.commit()?;
        Ok(total)
    }

    /// Returns the single live (active or paused) entry with its task and
    /// segments, or None when no timer is running.
    pub fn get_active(&mut self) -> Result<Option<ActiveEntry>> {
        let row = self
            .conn
            .query_row(SELECT_ACTIVE, [], |row| {
                Ok((Self::map_entry(row)?, row.get::<_, String>(7)?, row.get::<_, String>(8)?))
            })
            .optional()?;

        match row {
            Some((entry, task_name, task_color)) => {
                let segments = self.segments(entry.id)?;
                Ok(Some(ActiveEntry {
                    entry,
                    task_name,
                    task_color,
                    segments,
                }))
            }
            None => Ok(None),
        }
    }

    pub fn get_by_id(&mut self, entry_id: i64) -> Result<Option<TimeEntry>> {
        self.conn.query_row(SELECT_ENTRY, params![entry_id], Self::map_entry).optional().map_err(Into::into)
    }

    /// All segments of an entry ordered by start.
    pub fn segments(&mut self, entry_id: i64) -> Result<Vec<TimeSegment>> {
        let mut stmt = self.conn.prepare(SELECT_SEGMENTS)?;
        let segment_iter = stmt.query_map(params![entry_id], |row| {
            Ok(TimeSegment {
                id: row.get(0)?,
                entry_id: row.get(1)?,
                start: row.get(2)?,
                end: row.get(3)?,
            })
        })?;

        let mut segments = Vec::new();
        for segment in segment_iter {
            segments.push(segment?);
        }
        Ok(segments)
    }

    /// Records a completed entry directly, with a single closed segment
    /// spanning the interval. The only validated input path: the end must
    /// be strictly after the start. A live timer does not block this;
    /// completed entries never compete for the active-timer slot.
    pub fn add_manual(&mut self, task_id: i64, start: NaiveDateTime, end: NaiveDateTime, notes: &str) -> Result<i64> {
        if end <= start {
            return Err(TrackerError::Validation(Message::ManualEntryInvalidRange).into());
        }
        let total = (end - start).num_milliseconds() as f64 / 1000.0;

        let tx = self.conn.transaction()?;
        let task: Option<String> = tx.query_row(SELECT_TASK_NAME, params![task_id], |row| row.get(0)).optional()?;
        if task.is_none() {
            return Err(TrackerError::NotFound(Message::TaskNotFound(task_id)).into());
        }
        tx.execute(INSERT_MANUAL_ENTRY, params![task_id, start, end, total, notes])?;
        let entry_id = tx.last_insert_rowid();
        tx.execute(INSERT_CLOSED_SEGMENT, params![entry_id, start, end])?;
        tx.commit()?;
        Ok(entry_id)
    }

    /// Completed entries whose start date falls in the inclusive range,
    /// newest first. Multi-day entries bucket by their start date only.
    pub fn fetch_range(&mut self, start_date: NaiveDate, end_date: NaiveDate) -> Result<Vec<EntryRecord>> {
        let mut stmt = self.conn.prepare(SELECT_RANGE)?;
        let record_iter = stmt.query_map(params![start_date, end_date], |row| {
            Ok(EntryRecord {
                id: row.get(0)?,
                task_id: row.get(1)?,
                task_name: row.get(2)?,
                task_color: row.get(3)?,
                start_time: row.get(4)?,
                end_time: row.get(5)?,
                total_seconds: row.get(6)?,
                notes: row.get(7)?,
            })
        })?;

        let mut records = Vec::new();
        for record in record_iter {
            records.push(record?);
        }
        Ok(records)
    }

    pub fn fetch_today(&mut self) -> Result<Vec<EntryRecord>> {
        let today = Local::now().date_naive();
        self.fetch_range(today, today)
    }

    /// Deletes an entry and its segments.
    pub fn delete(&mut self, entry_id: i64) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(DELETE_SEGMENTS, params![entry_id])?;
        let affected = tx.execute(DELETE_ENTRY, params![entry_id])?;
        if affected == 0 {
            return Err(TrackerError::NotFound(Message::EntryNotFound(entry_id)).into());
        }
        tx.commit()?;
        Ok(())
    }

    pub fn update_notes(&mut self, entry_id: i64, notes: &str) -> Result<()> {
        let affected = self.conn.execute(UPDATE_NOTES, params![entry_id, notes])?;
        if affected == 0 {
            return Err(TrackerError::NotFound(Message::EntryNotFound(entry_id)).into());
        }
        Ok(())
    }

    fn status_of(tx: &Transaction, entry_id: i64) -> Result<EntryStatus> {
        let status: Option<String> = tx.query_row(SELECT_STATUS, params![entry_id], |row| row.get(0)).optional()?;
        let status = status.ok_or(TrackerError::NotFound(Message::EntryNotFound(entry_id)))?;
        status.parse::<EntryStatus>().map_err(|e| anyhow::anyhow!(e))
    }

    fn map_entry(row: &Row<'_>) -> rusqlite::Result<TimeEntry> {
        let status: String = row.get(4)?;
        let status = status
            .parse::<EntryStatus>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, e.into()))?;
        Ok(TimeEntry {
            id: row.get(0)?,
            task_id: row.get(1)?,
            start_time: row.get(2)?,
            end_time: row.get(3)?,
            status,
            total_seconds: row.get(5)?,
            notes: row.get(6)?,
        })
    }
}
