use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFilter, TaskUpdate, DEFAULT_COLOR};
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::Confirm;

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommands,
}

#[derive(Debug, Subcommand)]
enum TaskCommands {
    #[command(about = "Create a new task")]
    Add {
        name: String,
        #[arg(long, default_value = DEFAULT_COLOR)]
        color: String,
    },
    #[command(about = "List tasks")]
    List {
        /// Include archived tasks
        #[arg(long)]
        all: bool,
    },
    #[command(about = "Rename or recolor a task")]
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    #[command(about = "Archive a task, keeping its history")]
    Archive { id: i64 },
    #[command(about = "Bring an archived task back")]
    Restore { id: i64 },
    #[command(about = "Delete a task and ALL of its entries")]
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    match args.command {
        TaskCommands::Add { name, color } => {
            tasks.create(&Task::new(&name, &color))?;
            msg_success!(Message::TaskCreated(name.trim().to_string()));
        }
        TaskCommands::List { all } => {
            let filter = if all { TaskFilter::All } else { TaskFilter::Active };
            let listed = tasks.fetch(filter)?;
            if listed.is_empty() {
                msg_info!(Message::NoTasksFound);
            } else {
                View::tasks(&listed).map_err(|e| anyhow::anyhow!(e.to_string()))?;
            }
        }
        TaskCommands::Edit { id, name, color } => {
            let update = TaskUpdate {
                name,
                color,
                is_active: None,
            };
            tasks.update(id, &update)?;
            let task = tasks.get_by_id(id)?.ok_or(crate::libs::error::TrackerError::NotFound(Message::TaskNotFound(id)))?;
            msg_success!(Message::TaskUpdated(task.name));
        }
        TaskCommands::Archive { id } => {
            tasks.update(
                id,
                &TaskUpdate {
                    is_active: Some(false),
                    ..Default::default()
                },
            )?;
            let task = tasks.get_by_id(id)?.ok_or(crate::libs::error::TrackerError::NotFound(Message::TaskNotFound(id)))?;
            msg_success!(Message::TaskArchived(task.name));
        }
        TaskCommands::Restore { id } => {
            tasks.update(
                id,
                &TaskUpdate {
                    is_active: Some(true),
                    ..Default::default()
                },
            )?;
            let task = tasks.get_by_id(id)?.ok_or(crate::libs::error::TrackerError::NotFound(Message::TaskNotFound(id)))?;
            msg_success!(Message::TaskRestored(task.name));
        }
        TaskCommands::Delete { id, force } => {
            let task = match tasks.get_by_id(id)? {
                Some(task) => task,
                None => msg_bail_anyhow!(Message::TaskNotFound(id)),
            };
            // The core contract is an unconditional cascade; the prompt
            // lives here in the presentation layer only.
            if !force {
                let confirmed = Confirm::new()
                    .with_prompt(Message::ConfirmDeleteTask(task.name.clone()).to_string())
                    .default(false)
                    .interact()?;
                if !confirmed {
                    msg_info!(Message::TaskDeleteAborted);
                    return Ok(());
                }
            }
            tasks.delete(id)?;
            msg_success!(Message::TaskDeleted(task.name));
        }
    }

    Ok(())
}
