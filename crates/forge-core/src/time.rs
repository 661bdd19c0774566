//! Human-readable timestamp labels for history entries.

use chrono::{DateTime, Local};

/// Format a local time the way history entries display it (`14:05:09`).
pub fn format_timestamp(at: DateTime<Local>) -> String {
    at.format("%H:%M:%S").to_string()
}

/// The label for "now" in local time.
pub fn timestamp_label() -> String {
    format_timestamp(Local::now())
}
