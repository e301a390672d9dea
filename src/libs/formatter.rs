//! Time formatting utilities for user-friendly display.
//!
//! Two formats are used across the application: long durations ("HH:MM")
//! for stats, and short countdowns ("M:SS" or "45s") for active reminders.

use chrono::Duration;

/// Formats a chrono::Duration into a standardized "HH:MM" string.
///
/// Negative durations are treated as zero.
pub fn format_duration(duration: &Duration) -> String {
    // Extract hours and minutes from the duration
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats a countdown given in seconds.
///
/// Values under a minute render as "45s"; everything else as "M:SS".
pub fn format_countdown(seconds: u32) -> String {
    if seconds < 60 {
        return format!("{}s", seconds);
    }
    let minutes = seconds / 60;
    let remaining = seconds % 60;
    format!("{}:{:02}", minutes, remaining)
}

/// Formats fractional hours as "Xh Ym".
pub fn format_hours(hours: f64) -> String {
    let total_minutes = (hours.max(0.0) * 60.0).round() as i64;
    format!("{}h {}m", total_minutes / 60, total_minutes % 60)
}
