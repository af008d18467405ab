//! Time entry and segment record types.
//!
//! An entry is a single span of tracked work against one task. It is made
//! of one or more segments: a new segment opens on start and on every
//! resume, and the open segment closes on pause and on stop. Elapsed time
//! is never stored for a running entry; it is recomputed from segment
//! boundaries and the current wall clock on every read, which keeps pause
//! "freezing" the displayed value for free and avoids any ticking task.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a time entry. `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryStatus {
    Active,
    Paused,
    Completed,
}

impl EntryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Active => "active",
            EntryStatus::Paused => "paused",
            EntryStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(EntryStatus::Active),
            "paused" => Ok(EntryStatus::Paused),
            "completed" => Ok(EntryStatus::Completed),
            other => Err(format!("unknown entry status '{}'", other)),
        }
    }
}

/// A contiguous start/end interval within an entry.
///
/// `end` is `None` only for the single open segment of an active entry.
#[derive(Debug, Clone)]
pub struct TimeSegment {
    pub id: i64,
    pub entry_id: i64,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
}

impl TimeSegment {
    /// Duration of a closed segment in seconds; open segments report zero.
    pub fn seconds(&self) -> f64 {
        match self.end {
            Some(end) => (end - self.start).num_milliseconds() as f64 / 1000.0,
            None => 0.0,
        }
    }
}

/// A stored time entry. `total_seconds` is authoritative only once the
/// entry is completed; until then it stays at zero.
#[derive(Debug, Clone)]
pub struct TimeEntry {
    pub id: i64,
    pub task_id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub status: EntryStatus,
    pub total_seconds: f64,
    pub notes: String,
}

/// The at-most-one live (active or paused) entry, joined with its task and
/// carrying its full segment list for elapsed-time computation.
#[derive(Debug, Clone)]
pub struct ActiveEntry {
    pub entry: TimeEntry,
    pub task_name: String,
    pub task_color: String,
    pub segments: Vec<TimeSegment>,
}

impl ActiveEntry {
    /// Elapsed seconds at instant `now`: the sum of closed segments, plus
    /// the running tail of the open segment while the entry is active.
    /// While paused there is no open segment, so the value is frozen.
    pub fn elapsed_at(&self, now: NaiveDateTime) -> f64 {
        let mut total = 0.0;
        for segment in &self.segments {
            match segment.end {
                Some(_) => total += segment.seconds(),
                None if self.entry.status == EntryStatus::Active => {
                    total += (now - segment.start).num_milliseconds() as f64 / 1000.0;
                }
                None => {}
            }
        }
        total
    }

    /// Elapsed seconds against the local wall clock.
    pub fn elapsed(&self) -> f64 {
        self.elapsed_at(Local::now().naive_local())
    }
}

/// A completed entry joined with task name and color, as returned by the
/// range queries for listings and export.
#[derive(Debug, Clone)]
pub struct EntryRecord {
    pub id: i64,
    pub task_id: i64,
    pub task_name: String,
    pub task_color: String,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub total_seconds: f64,
    pub notes: String,
}
