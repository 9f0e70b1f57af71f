use chrono::{DateTime, Local, TimeZone};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Joins the message words with single spaces, or falls back to a
/// timestamped default when no words were given.
pub fn resolve_message(words: &[String]) -> String {
    resolve_message_at(words, &Local::now())
}

pub fn resolve_message_at<Tz>(words: &[String], now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if words.is_empty() {
        format!("Auto commit at {}", now.format(TIMESTAMP_FORMAT))
    } else {
        words.join(" ")
    }
}
