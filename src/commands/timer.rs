use crate::db::entries::Entries;
use crate::db::tasks::Tasks;
use crate::libs::entry::EntryStatus;
use crate::libs::formatter::format_duration;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StartArgs {
    /// Task name to track against
    #[arg(required = true)]
    task: String,
    /// What you are working on
    #[arg(long, default_value = "")]
    notes: String,
}

pub fn start(args: StartArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;
    let task = match tasks.get_by_name(args.task.trim())? {
        Some(task) => task,
        None => msg_bail_anyhow!(Message::TaskNotFoundByName(args.task)),
    };

    Entries::new()?.start(task.id.unwrap_or(0), &args.notes)?;
    msg_success!(Message::TimerStarted(task.name));
    Ok(())
}

pub fn pause() -> Result<()> {
    let mut entries = Entries::new()?;
    let active = match entries.get_active()? {
        Some(active) => active,
        None => msg_bail_anyhow!(Message::NoActiveTimer),
    };

    entries.pause(active.entry.id)?;
    msg_success!(Message::TimerPaused(active.task_name));
    Ok(())
}

pub fn resume() -> Result<()> {
    let mut entries = Entries::new()?;
    let active = match entries.get_active()? {
        Some(active) => active,
        None => msg_bail_anyhow!(Message::NoActiveTimer),
    };

    entries.resume(active.entry.id)?;
    msg_success!(Message::TimerResumed(active.task_name));
    Ok(())
}

pub fn stop() -> Result<()> {
    let mut entries = Entries::new()?;
    let active = match entries.get_active()? {
        Some(active) => active,
        None => msg_bail_anyhow!(Message::NoActiveTimer),
    };

    let total = entries.stop(active.entry.id)?;
    msg_success!(Message::TimerStopped(active.task_name, format_duration(total)));
    Ok(())
}

/// Shows the live timer. Elapsed time is recomputed from the stored
/// segments and the wall clock on every call; while paused it stands
/// still without any bookkeeping.
pub fn status() -> Result<()> {
    let mut entries = Entries::new()?;
    let active = match entries.get_active()? {
        Some(active) => active,
        None => {
            msg_info!(Message::NoActiveTimer);
            return Ok(());
        }
    };

    let state = match active.entry.status {
        EntryStatus::Active => "running",
        EntryStatus::Paused => "paused",
        EntryStatus::Completed => "completed",
    };
    msg_print!(format!("{}  {} ({})", format_duration(active.elapsed()), active.task_name, state));
    if !active.entry.notes.is_empty() {
        msg_print!(format!("📝 {}", active.entry.notes));
    }
    Ok(())
}
