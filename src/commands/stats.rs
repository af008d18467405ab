use crate::db::stats::Stats;
use crate::libs::formatter::{format_duration, format_hours};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::{Datelike, Duration, Local, NaiveDate};
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum Period {
    Today,
    Week,
    Month,
    Year,
}

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[arg(long, value_enum, default_value = "today")]
    period: Period,
    /// Custom range start, overrides --period together with --to
    #[arg(long)]
    from: Option<NaiveDate>,
    /// Custom range end
    #[arg(long)]
    to: Option<NaiveDate>,
}

/// Inclusive date range for a reporting period relative to `today`.
/// The week starts on Monday; month and year cover their full calendar
/// extent so that range rows can be compared against a fixed window.
pub fn period_range(period: Period, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    match period {
        Period::Today => (today, today),
        Period::Week => {
            let start = today - Duration::days(today.weekday().num_days_from_monday() as i64);
            (start, start + Duration::days(6))
        }
        Period::Month => {
            let start = today.with_day(1).unwrap_or(today);
            // 31 days past the 1st always lands in the next month
            let next = start + Duration::days(31);
            let end = next.with_day(1).unwrap_or(next) - Duration::days(1);
            (start, end)
        }
        Period::Year => {
            let start = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
            let end = NaiveDate::from_ymd_opt(today.year(), 12, 31).unwrap_or(today);
            (start, end)
        }
    }
}

pub fn cmd(args: StatsArgs) -> Result<()> {
    let today = Local::now().date_naive();
    let (from, to) = match (args.from, args.to) {
        (Some(from), Some(to)) => (from, to),
        _ => period_range(args.period, today),
    };

    let mut stats = Stats::new()?;
    let daily_data = stats.range(from, to)?;
    let task_data = stats.distribution(from, to)?;

    if daily_data.is_empty() {
        msg_info!(Message::NoEntriesForPeriod);
        return Ok(());
    }

    let total_seconds: f64 = daily_data.iter().map(|d| d.total_seconds).sum();
    let days_in_range = ((to - from).num_days() + 1).max(1);
    let days_worked = daily_data.len();
    let avg_per_day = total_seconds / days_worked.max(1) as f64;
    let top_task = task_data.first().map(|t| t.name.clone()).unwrap_or_else(|| "-".to_string());

    msg_print!(format!(
        "Total {} | Days worked {}/{} | Avg/day {} | Top task: {}",
        format_hours(total_seconds),
        days_worked,
        days_in_range,
        format_hours(avg_per_day),
        top_task
    ));

    msg_print!("Hours by day:");
    View::day_totals(&daily_data).map_err(|e| anyhow::anyhow!(e.to_string()))?;

    msg_print!("Task distribution:");
    View::distribution(&task_data, total_seconds).map_err(|e| anyhow::anyhow!(e.to_string()))?;

    // Single-day view adds first-start/last-stop detail and the idle gap
    // between them that was not tracked.
    if from == to {
        let day = stats.daily(from)?;
        if let Some(first) = day.first_start {
            let logout = day.last_end.map(|l| l.format("%H:%M").to_string()).unwrap_or_else(|| "-".to_string());
            msg_print!(format!("First start {} | Last stop {}", first.format("%H:%M"), logout));
            if let Some(last) = day.last_end {
                let span = (last - first).num_seconds() as f64;
                let breaks = (span - day.total_seconds).max(0.0);
                msg_print!(format!("Break time: {}", format_duration(breaks)));
            }
        }
    }

    Ok(())
}
