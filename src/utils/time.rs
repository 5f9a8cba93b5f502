use chrono::{DateTime, Utc};

pub fn f64_to_datetime_utc(timestamp: f64) -> Option<DateTime<Utc>> {
    if !timestamp.is_finite() {
        return None;
    }
    // Convert the f64 timestamp to seconds and nanoseconds
    let seconds = timestamp.floor() as i64;
    let nanoseconds = ((timestamp - timestamp.floor()) * 1_000_000_000.0) as u32;

    DateTime::from_timestamp(seconds, nanoseconds.min(999_999_999))
}

/* Accept either a RFC 3339 date ("2024-05-01T10:00:00Z") or a unix timestamp in seconds ("1714557600.5") */
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }
    value.parse::<f64>().ok().and_then(f64_to_datetime_utc)
}
