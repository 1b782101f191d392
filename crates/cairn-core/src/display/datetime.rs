//! Date and datetime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

use crate::dates::CanonicalDate;

/// A wrapper around `Timestamp` that provides system timezone formatting via
/// the `Display` trait.
///
/// # Format
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
/// - Year, month, and day are zero-padded
/// - Time is in 24-hour format with zero-padded components
/// - Timezone abbreviation is included (e.g., UTC, EST, JST)
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
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

/// Formats a [`CanonicalDate`] as a bare calendar day (`YYYY-MM-DD`).
///
/// The absence marker renders as its fixed sentinel, so displaying a
/// milestone with no date never fails and never shows a bogus date.
pub struct CalendarDay<'a>(pub &'a CanonicalDate);

impl fmt::Display for CalendarDay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
