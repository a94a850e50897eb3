//! Clock text formatting.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use chrono::{Datelike, Timelike};

/// Weekday labels indexed by days since Sunday.
pub const WEEKDAYS: [&str; 7] = ["周日", "周一", "周二", "周三", "周四", "周五", "周六"];

/// Weekday label for a day-of-week index (0 = Sunday). Wraps out-of-range input.
#[must_use]
pub fn weekday_label(index: u32) -> &'static str {
    WEEKDAYS[(index % 7) as usize]
}

/// Zero-padded 24-hour `HH:MM:SS`.
#[must_use]
pub fn format_time(hour: u32, minute: u32, second: u32) -> String {
    format!("{hour:02}:{minute:02}:{second:02}")
}

/// Render the clock line for an instant: `"HH:MM:SS <weekday>"`.
#[must_use]
pub fn clock_text<T: Datelike + Timelike>(now: &T) -> String {
    let time = format_time(now.hour(), now.minute(), now.second());
    let weekday = weekday_label(now.weekday().num_days_from_sunday());
    format!("{time} {weekday}")
}
