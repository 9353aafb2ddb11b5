//! Display formatting for link metadata.
//!
//! All functions are pure; [`relative_time`] takes the evaluation instant as
//! a parameter so callers and tests control "now".

use chrono::{DateTime, Utc};
use url::Url;

/// Marker appended to truncated strings.
const ELLIPSIS: &str = "...";

/// Buckets the age of `timestamp` relative to `now` into a human phrase.
///
/// Under a minute reads "just now"; minutes, hours, and days carry
/// singular/plural suffixes; anything 30 days or older falls back to the
/// absolute [`format_date`] rendering. A timestamp in the future is treated
/// as "just now".
pub fn relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds().max(0);

    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{minutes} minute{} ago", plural(minutes));
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours} hour{} ago", plural(hours));
    }

    let days = hours / 24;
    if days < 30 {
        return format!("{days} day{} ago", plural(days));
    }

    format_date(timestamp)
}

/// Absolute calendar-style rendering, e.g. "Mar 5, 2026, 02:30 PM".
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// Returns `text` unchanged when it fits, otherwise its first `max_len`
/// characters followed by an ellipsis marker.
///
/// Counts characters, not bytes, so multi-byte input never splits a
/// boundary. Total on empty input and `max_len == 0`.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }

    let head: String = text.chars().take(max_len).collect();
    format!("{head}{ELLIPSIS}")
}

/// Host component of `url`, or an empty string when it does not parse.
///
/// Used as the display fallback when a link has no title.
pub fn hostname_of(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default()
}

/// Decimal rendering with thousands grouping, e.g. `1234567` → "1,234,567".
pub fn format_count(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn plural(n: i64) -> &'static str {
    if n == 1 { "" } else { "s" }
}
