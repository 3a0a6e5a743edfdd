//! Time and timestamp helpers.

use chrono::{DateTime, Local};

/// Local wall-clock timestamp used for "last update" and log prefixes.
pub type Timestamp = DateTime<Local>;

/// Return the current local time.
#[must_use]
pub fn now() -> Timestamp {
    Local::now()
}

/// Format a timestamp the way the page shows it: `HH:MM:SS`, 24-hour clock.
#[must_use]
pub fn clock_time(ts: &Timestamp) -> String {
    ts.format("%H:%M:%S").to_string()
}
