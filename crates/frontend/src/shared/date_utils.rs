/// Utilities for date and time formatting
///
/// Backend timestamps arrive either as RFC 3339 (`2024-03-15T14:02:26.123Z`)
/// or as zone-less local date-times (`2024-03-15T14:02:26.123`).
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format an ISO datetime string as `YYYY-MM-DD HH:MM:SS`
/// Example: "2024-03-15T14:02:26.123" -> "2024-03-15 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        return dt.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    datetime_str.to_string()
}

/// Format an ISO date as `YYYY-MM-DD`, dropping any time part
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Clock time of a log entry timestamp, `HH:MM:SS`
pub fn format_log_time(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.format("%H:%M:%S").to_string(),
        Err(_) => timestamp.to_string(),
    }
}
