//! Date and time helpers
//!
//! Event dates are date-only values with a separate "HH:MM" wall-clock
//! string, combined on demand for ordering and countdown labels.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Display formats for event dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    Short,
    Medium,
    Long,
}

/// Combine a calendar date with a "HH:MM" wall-clock string.
///
/// Accepts a trailing seconds component for data written by older builds.
pub fn combine_date_time(date: NaiveDate, time: &str) -> Option<NaiveDateTime> {
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .ok()?;
    Some(date.and_time(time))
}

/// Format an event date for display
pub fn format_event_date(date: NaiveDate, time: Option<&str>, format: DateFormat) -> String {
    let formatted = match format {
        DateFormat::Short => date.format("%b %-d").to_string(),
        DateFormat::Medium => date.format("%b %-d, %Y").to_string(),
        DateFormat::Long => date.format("%A, %B %-d, %Y").to_string(),
    };

    match time {
        Some(time) => format!("{} at {}", formatted, time),
        None => formatted,
    }
}

/// Human countdown label for an event start ("Today", "In 3 days", ...)
pub fn time_until(date: NaiveDate, time: &str) -> String {
    let starts_at = match combine_date_time(date, time) {
        Some(starts_at) => starts_at,
        None => return "Date TBD".to_string(),
    };
    let now = Local::now().naive_local();

    if starts_at < now {
        return "Past event".to_string();
    }

    let days = (starts_at - now).num_days();

    if days == 0 {
        "Today".to_string()
    } else if days == 1 {
        "Tomorrow".to_string()
    } else if days < 7 {
        format!("In {} days", days)
    } else if days < 30 {
        format!("In {} weeks", days / 7)
    } else {
        format!("In {} months", days / 30)
    }
}
