use super::entry::EntryRecord;
use super::formatter::{format_duration, format_hours, percent_share};
use super::task::Task;
use crate::db::stats::{DayTotal, TaskTotal};
use prettytable::{row, Table};
use std::error::Error;

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "COLOR", "STATUS"]);
        for task in tasks {
            table.add_row(row![
                task.id.unwrap_or(0),
                task.name,
                task.color,
                if task.is_active { "active" } else { "archived" }
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn entries(entries: &[EntryRecord]) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TASK", "START", "END", "DURATION", "NOTES"]);
        for entry in entries {
            table.add_row(row![
                entry.id,
                entry.task_name,
                entry.start_time.format("%Y-%m-%d %H:%M"),
                entry.end_time.map(|e| e.format("%H:%M").to_string()).unwrap_or_else(|| "…".to_string()),
                format_duration(entry.total_seconds),
                entry.notes
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn day_totals(days: &[DayTotal]) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "HOURS", "ENTRIES"]);
        for day in days {
            table.add_row(row![day.day, format_hours(day.total_seconds), day.entry_count]);
        }
        table.printstd();

        Ok(())
    }

    pub fn distribution(tasks: &[TaskTotal], total_seconds: f64) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();

        table.add_row(row!["TASK", "HOURS", "ENTRIES", "SHARE"]);
        for task in tasks {
            table.add_row(row![
                task.name,
                format_hours(task.total_seconds),
                task.entry_count,
                format!("{:.0}%", percent_share(task.total_seconds, total_seconds))
            ]);
        }
        table.printstd();

        Ok(())
    }
}
