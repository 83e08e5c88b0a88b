use chrono::{NaiveDate, TimeZone, Utc};

use crate::config::DATE_FORMAT;

/// Format a Unix timestamp in milliseconds as YYYY-MM-DD (UTC)
pub fn format_timestamp(timestamp_ms: i64) -> String {
    match Utc.timestamp_millis_opt(timestamp_ms).single() {
        Some(datetime) => datetime.format(DATE_FORMAT).to_string(),
        None => timestamp_ms.to_string(),
    }
}

/// Parse a YYYY-MM-DD date
pub fn parse_date(text: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|e| format!("Invalid date '{}', expected YYYY-MM-DD: {}", text, e))
}
