//! # Trackle
//!
//! A command-line time tracker for freelancers tracking billable hours.
//!
//! ## Features
//!
//! - **Tasks**: named, color-coded activities; archive instead of delete
//!   to keep history
//! - **Timer**: one global start/pause/resume/stop timer with
//!   segment-based accounting, so paused time never counts
//! - **Manual Entries**: backfill completed work as start/end intervals
//! - **Reports**: daily, weekly, monthly and yearly totals plus a
//!   per-task distribution
//! - **Export**: CSV or JSON for invoicing
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trackle::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
