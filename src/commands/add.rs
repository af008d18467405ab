use crate::db::entries::Entries;
use crate::db::tasks::Tasks;
use crate::libs::formatter::format_duration;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveTime};
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task name to book the time against
    #[arg(required = true)]
    task: String,
    /// Date of the entry, defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Start time, e.g. 09:00
    #[arg(long)]
    start: String,
    /// End time, e.g. 17:00
    #[arg(long)]
    end: String,
    #[arg(long, default_value = "")]
    notes: String,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;
    let task = match tasks.get_by_name(args.task.trim())? {
        Some(task) => task,
        None => msg_bail_anyhow!(Message::TaskNotFoundByName(args.task)),
    };

    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let start = date.and_time(parse_time(&args.start)?);
    let end = date.and_time(parse_time(&args.end)?);

    Entries::new()?.add_manual(task.id.unwrap_or(0), start, end, &args.notes)?;
    msg_success!(Message::ManualEntryAdded(
        task.name,
        format_duration((end - start).num_seconds() as f64)
    ));
    Ok(())
}

fn parse_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| anyhow::anyhow!("Invalid time '{}', expected HH:MM", value))
}
