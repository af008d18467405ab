//! Entry export for invoicing and external analysis.
//!
//! Exports the completed entries of a date range as CSV (the invoicing
//! format: Task, Start, End, Hours rounded to two decimals, Notes) or as
//! the same rows pretty-printed to JSON. Rows come straight from
//! [`Entries::fetch_range`](crate::db::entries::Entries::fetch_range);
//! export never derives data of its own.

use crate::libs::entry::EntryRecord;
use crate::libs::formatter::hours_2dp;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values, compatible with any spreadsheet.
    Csv,
    /// The same rows as pretty-printed JSON.
    Json,
}

/// One exported row. All temporal fields are pre-formatted strings so the
/// CSV and JSON outputs stay byte-for-byte consistent with each other.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportRow {
    #[serde(rename = "Task")]
    pub task: String,
    #[serde(rename = "Start")]
    pub start: String,
    #[serde(rename = "End")]
    pub end: String,
    #[serde(rename = "Hours")]
    pub hours: f64,
    #[serde(rename = "Notes")]
    pub notes: String,
}

impl ExportRow {
    fn from_record(record: &EntryRecord) -> Self {
        Self {
            task: record.task_name.clone(),
            start: record.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            end: record.end_time.map(|e| e.format("%Y-%m-%d %H:%M:%S").to_string()).unwrap_or_default(),
            hours: hours_2dp(record.total_seconds),
            notes: record.notes.clone(),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter; without an explicit path a timestamped file
    /// name is generated in the current directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("trackle_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    pub fn export(&self, entries: &[EntryRecord]) -> Result<()> {
        let rows: Vec<ExportRow> = entries.iter().map(ExportRow::from_record).collect();

        match self.format {
            ExportFormat::Csv => self.write_csv(&rows)?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&rows)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn write_csv(&self, rows: &[ExportRow]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
