#[cfg(test)]
mod tests {
    use chrono::Duration;
    use ergomate::libs::formatter::{format_countdown, format_duration, format_hours};

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(&Duration::hours(8)), "08:00");
        assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
        assert_eq!(format_duration(&Duration::minutes(45)), "00:45");
        assert_eq!(format_duration(&Duration::zero()), "00:00");
    }

    #[test]
    fn test_format_duration_clamps_negative() {
        assert_eq!(format_duration(&Duration::hours(-1)), "00:00");
    }

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(45), "45s");
        assert_eq!(format_countdown(59), "59s");
        assert_eq!(format_countdown(60), "1:00");
        assert_eq!(format_countdown(125), "2:05");
        assert_eq!(format_countdown(1200), "20:00");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(0.0), "0h 0m");
        assert_eq!(format_hours(1.5), "1h 30m");
        assert_eq!(format_hours(7.25), "7h 15m");
        assert_eq!(format_hours(-2.0), "0h 0m");
    }
}
