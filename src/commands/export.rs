use crate::db::entries::Entries;
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::msg_info;
use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(long, value_enum, default_value = "csv")]
    format: ExportFormat,
    /// Output file; a timestamped name is generated when omitted
    #[arg(long)]
    output: Option<PathBuf>,
    /// Range start, defaults to 30 days ago
    #[arg(long)]
    from: Option<NaiveDate>,
    /// Range end, defaults to today
    #[arg(long)]
    to: Option<NaiveDate>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let today = Local::now().date_naive();
    let from = args.from.unwrap_or(today - Duration::days(30));
    let to = args.to.unwrap_or(today);

    let records = Entries::new()?.fetch_range(from, to)?;
    if records.is_empty() {
        msg_info!(Message::ExportNothingToExport);
        return Ok(());
    }

    Exporter::new(args.format, args.output).export(&records)
}
