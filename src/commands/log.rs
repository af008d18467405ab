use crate::db::entries::Entries;
use crate::libs::formatter::format_hours;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct LogArgs {
    /// Range start, defaults to today
    #[arg(long)]
    from: Option<NaiveDate>,
    /// Range end, defaults to today
    #[arg(long)]
    to: Option<NaiveDate>,
    /// Delete the entry with this ID instead of listing
    #[arg(long)]
    delete: Option<i64>,
    /// Rewrite the notes of the entry with this ID instead of listing
    #[arg(long, value_name = "ID", requires = "notes")]
    edit: Option<i64>,
    /// New notes text for --edit
    #[arg(long)]
    notes: Option<String>,
}

pub fn cmd(args: LogArgs) -> Result<()> {
    let mut entries = Entries::new()?;

    if let Some(id) = args.delete {
        entries.delete(id)?;
        msg_success!(Message::EntryDeleted(id));
        return Ok(());
    }

    if let Some(id) = args.edit {
        entries.update_notes(id, args.notes.as_deref().unwrap_or_default())?;
        msg_success!(Message::EntryNotesUpdated(id));
        return Ok(());
    }

    let today = Local::now().date_naive();
    let from = args.from.unwrap_or(today);
    let to = args.to.unwrap_or(today);

    let records = entries.fetch_range(from, to)?;
    if records.is_empty() {
        msg_info!(Message::NoEntriesForPeriod);
        return Ok(());
    }

    View::entries(&records).map_err(|e| anyhow::anyhow!(e.to_string()))?;
    let total: f64 = records.iter().map(|r| r.total_seconds).sum();
    msg_print!(format!("Total: {} over {} entries", format_hours(total), records.len()));
    Ok(())
}
