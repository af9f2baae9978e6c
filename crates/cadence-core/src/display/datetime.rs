//! Date and time display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

use crate::models::PublishDays;

/// A wrapper around `Timestamp` that formats it in the system timezone.
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Comma-separated short weekday names, Sunday first.
///
/// ```rust
/// use cadence_core::{display::weekday_names, models::PublishDays};
///
/// let days = PublishDays::from_indices([5, 0, 1]).unwrap();
/// assert_eq!(weekday_names(&days), "Sun, Mon, Fri");
/// ```
pub fn weekday_names(days: &PublishDays) -> String {
    days.indices()
        .into_iter()
        .map(|index| WEEKDAY_ABBREVIATIONS[index as usize])
        .collect::<Vec<_>>()
        .join(", ")
}
