//! Aggregation queries over completed entries.
//!
//! All reads filter `status = 'completed'` and bucket by the date portion
//! of `start_time` against an inclusive date range. Dates with no
//! completed entries simply do not appear in range results; callers that
//! want a dense series fill the gaps themselves.

use crate::db::db::Db;
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection};

const SELECT_DAILY_TOTALS: &str = "
    SELECT COALESCE(SUM(total_seconds), 0), COUNT(*), MIN(start_time), MAX(end_time)
    FROM time_entries
    WHERE status = 'completed' AND DATE(start_time) = ?1";
const SELECT_DAILY_BY_TASK: &str = "
    SELECT t.name, t.color, SUM(te.total_seconds), COUNT(*)
    FROM time_entries te JOIN tasks t ON te.task_id = t.id
    WHERE te.status = 'completed' AND DATE(te.start_time) = ?1
    GROUP BY t.id ORDER BY SUM(te.total_seconds) DESC";
const SELECT_RANGE_BY_DAY: &str = "
    SELECT DATE(start_time) AS day, SUM(total_seconds), COUNT(*)
    FROM time_entries
    WHERE status = 'completed'
      AND DATE(start_time) >= ?1 AND DATE(start_time) <= ?2
    GROUP BY DATE(start_time) ORDER BY day";
const SELECT_DISTRIBUTION: &str = "
    SELECT t.name, t.color, SUM(te.total_seconds), COUNT(*)
    FROM time_entries te JOIN tasks t ON te.task_id = t.id
    WHERE te.status = 'completed'
      AND DATE(te.start_time) >= ?1 AND DATE(te.start_time) <= ?2
    GROUP BY t.id ORDER BY SUM(te.total_seconds) DESC";

/// Per-task subtotal within a day or range.
#[derive(Debug, Clone)]
pub struct TaskTotal {
    pub name: String,
    pub color: String,
    pub total_seconds: f64,
    pub entry_count: i64,
}

/// Aggregate figures for a single date.
#[derive(Debug, Clone)]
pub struct DailyStats {
    pub total_seconds: f64,
    pub entry_count: i64,
    pub first_start: Option<NaiveDateTime>,
    pub last_end: Option<NaiveDateTime>,
    pub tasks: Vec<TaskTotal>,
}

/// One row per calendar date that has at least one completed entry.
#[derive(Debug, Clone)]
pub struct DayTotal {
    pub day: NaiveDate,
    pub total_seconds: f64,
    pub entry_count: i64,
}

pub struct Stats {
    conn: Connection,
}

impl Stats {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Totals, entry count, first start, last end and the per-task
    /// breakdown for one date.
    pub fn daily(&mut self, date: NaiveDate) -> Result<DailyStats> {
        let (total_seconds, entry_count, first_start, last_end) = self.conn.query_row(SELECT_DAILY_TOTALS, params![date], |row| {
            Ok((
                row.get::<_, f64>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, Option<NaiveDateTime>>(2)?,
                row.get::<_, Option<NaiveDateTime>>(3)?,
            ))
        })?;

        let mut stmt = self.conn.prepare(SELECT_DAILY_BY_TASK)?;
        let task_iter = stmt.query_map(params![date], Self::map_task_total)?;
        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }

        Ok(DailyStats {
            total_seconds,
            entry_count,
            first_start,
            last_end,
            tasks,
        })
    }

    /// Per-day totals over the inclusive range, ascending by date. Days
    /// with zero completed entries are absent.
    pub fn range(&mut self, start_date: NaiveDate, end_date: NaiveDate) -> Result<Vec<DayTotal>> {
        let mut stmt = self.conn.prepare(SELECT_RANGE_BY_DAY)?;
        let day_iter = stmt.query_map(params![start_date, end_date], |row| {
            Ok(DayTotal {
                day: row.get(0)?,
                total_seconds: row.get(1)?,
                entry_count: row.get(2)?,
            })
        })?;

        let mut days = Vec::new();
        for day in day_iter {
            days.push(day?);
        }
        Ok(days)
    }

    /// Per-task totals over the inclusive range, descending by total
    /// seconds. The first row is the "top task".
    pub fn distribution(&mut self, start_date: NaiveDate, end_date: NaiveDate) -> Result<Vec<TaskTotal>> {
        let mut stmt = self.conn.prepare(SELECT_DISTRIBUTION)?;
        let task_iter = stmt.query_map(params![start_date, end_date], Self::map_task_total)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    fn map_task_total(row: &rusqlite::Row<'_>) -> rusqlite::Result<TaskTotal> {
        Ok(TaskTotal {
            name: row.get(0)?,
            color: row.get(1)?,
            total_seconds: row.get(2)?,
            entry_count: row.get(3)?,
        })
    }
}
