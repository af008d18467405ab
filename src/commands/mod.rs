pub mod add;
pub mod export;
pub mod log;
pub mod stats;
pub mod task;
pub mod timer;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Manage tasks")]
    Task(task::TaskArgs),
    #[command(about = "Start a timer for a task")]
    Start(timer::StartArgs),
    #[command(about = "Pause the running timer")]
    Pause,
    #[command(about = "Resume the paused timer")]
    Resume,
    #[command(about = "Stop the timer and record the entry")]
    Stop,
    #[command(about = "Show the running timer")]
    Status,
    #[command(about = "Add a manual time entry")]
    Add(add::AddArgs),
    #[command(about = "List completed entries")]
    Log(log::LogArgs),
    #[command(about = "Show aggregated statistics")]
    Stats(stats::StatsArgs),
    #[command(about = "Export entries to CSV or JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Task(args) => task::cmd(args),
            Commands::Start(args) => timer::start(args),
            Commands::Pause => timer::pause(),
            Commands::Resume => timer::resume(),
            Commands::Stop => timer::stop(),
            Commands::Status => timer::status(),
            Commands::Add(args) => add::cmd(args),
            Commands::Log(args) => log::cmd(args),
            Commands::Stats(args) => stats::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
