//! Duration formatting helpers used by views, status output and export.
//!
//! Two formats are used throughout the application:
//!
//! - `format_duration`: "HH:MM:SS", the live timer display.
//! - `format_hours`: "X.X h", the compact form used in summaries.
//!
//! Negative or missing durations render as zero; formatting never fails.

/// Seconds → "HH:MM:SS".
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "00:00:00".to_string();
    }
    let total = seconds as u64;
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}

/// Seconds → "X.X h".
pub fn format_hours(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0.0 h".to_string();
    }
    format!("{:.1} h", seconds / 3600.0)
}

/// Seconds → hours rounded to two decimals, as exported to CSV.
pub fn hours_2dp(seconds: f64) -> f64 {
    (seconds / 3600.0 * 100.0).round() / 100.0
}

/// A part's share of a total as a percentage; zero totals yield zero.
pub fn percent_share(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}
