#[cfg(test)]
mod tests {
    use trackle::libs::formatter::{format_duration, format_hours, hours_2dp, percent_share};

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "00:00:00");
        assert_eq!(format_duration(59.0), "00:00:59");
        assert_eq!(format_duration(90.0), "00:01:30");
        assert_eq!(format_duration(3661.0), "01:01:01");
        assert_eq!(format_duration(28800.0), "08:00:00");
        // Over a day keeps counting hours
        assert_eq!(format_duration(90000.0), "25:00:00");
    }

    #[test]
    fn test_format_duration_degenerate_inputs() {
        assert_eq!(format_duration(-5.0), "00:00:00");
        assert_eq!(format_duration(f64::NAN), "00:00:00");
        assert_eq!(format_duration(f64::INFINITY), "00:00:00");
        // Fractional seconds truncate
        assert_eq!(format_duration(59.9), "00:00:59");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(0.0), "0.0 h");
        assert_eq!(format_hours(1800.0), "0.5 h");
        assert_eq!(format_hours(28800.0), "8.0 h");
        assert_eq!(format_hours(-10.0), "0.0 h");
    }

    #[test]
    fn test_hours_2dp() {
        assert_eq!(hours_2dp(3600.0), 1.0);
        assert_eq!(hours_2dp(4800.0), 1.33);
        assert_eq!(hours_2dp(5400.0), 1.5);
        assert_eq!(hours_2dp(0.0), 0.0);
    }

    #[test]
    fn test_percent_share() {
        assert_eq!(percent_share(25.0, 100.0), 25.0);
        assert_eq!(percent_share(1.0, 3.0), 100.0 / 3.0);
        assert_eq!(percent_share(5.0, 0.0), 0.0);
    }
}
