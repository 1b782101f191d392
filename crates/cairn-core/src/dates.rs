//! Date canonicalization for externally-sourced date values.
//!
//! Records coming back from a document store carry dates in whatever shape
//! the writer used: a `{seconds, nanoseconds}` timestamp record, an epoch
//! millisecond number, an ISO-8601 string, or something already broken.
//! This module resolves all of them, exactly once at the boundary, into
//! [`CanonicalDate`]: a value that is either a valid instant or explicitly
//! absent. Downstream code never sees a raw date-like value.
//!
//! Conversion is total. No input (null, negative seconds, an unparsable
//! string, an out-of-range epoch) causes an error or a panic; every failure
//! resolves to the absence marker.

use jiff::{civil, tz::TimeZone, Span, Timestamp};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sentinel returned by [`CanonicalDate::format`] for the absence marker.
///
/// Distinct from any valid formatted output, so callers can detect a missing
/// date by string equality instead of error handling.
pub const ABSENT_DISPLAY: &str = "no date";

/// The known external shapes a date value can arrive in.
///
/// Deserialization is infallible: anything that matches none of the concrete
/// shapes lands in `Other` and resolves to absence during canonicalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDateValue {
    /// Cloud-timestamp convention: seconds since the epoch plus nanoseconds.
    TimestampRecord {
        seconds: i64,
        #[serde(default)]
        nanoseconds: i64,
    },
    /// Milliseconds since the Unix epoch.
    EpochMillis(i64),
    /// ISO-8601 text, with or without an offset, or a bare calendar date.
    Iso(String),
    /// Anything else (null, booleans, arrays, non-integer numbers, ...).
    Other(serde_json::Value),
}

/// A validated point in time, or an explicit absence marker.
///
/// Invalidity is never observable: every conversion that cannot produce a
/// real instant yields the absent value instead. Serializes as an RFC 3339
/// string when present and `null` when absent; deserializes from any of the
/// [`RawDateValue`] shapes without ever failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CanonicalDate(Option<Timestamp>);

impl CanonicalDate {
    /// The explicit "no date" value.
    pub const fn absent() -> Self {
        Self(None)
    }

    /// The current instant.
    pub fn now() -> Self {
        Self(Some(Timestamp::now()))
    }

    /// Returns true when a valid instant is present.
    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Returns true for the absence marker.
    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// The underlying instant, if present.
    pub fn timestamp(&self) -> Option<Timestamp> {
        self.0
    }

    /// Resolves absence to the current instant.
    pub fn or_now(&self) -> Self {
        Self(Some(self.0.unwrap_or_else(Timestamp::now)))
    }

    /// Formats with a strftime pattern, in UTC.
    ///
    /// Never fails: the absence marker formats to [`ABSENT_DISPLAY`], and a
    /// bad pattern falls back to the RFC 3339 rendering of the instant.
    pub fn format(&self, pattern: &str) -> String {
        match self.0 {
            Some(ts) => {
                let zoned = ts.to_zoned(TimeZone::UTC);
                jiff::fmt::strtime::format(pattern, &zoned)
                    .unwrap_or_else(|_| ts.to_string())
            }
            None => ABSENT_DISPLAY.to_string(),
        }
    }

    /// Whole days between two dates, or `None` if either side is absent.
    ///
    /// Positive when `other` is later than `self`.
    pub fn days_between(&self, other: &CanonicalDate) -> Option<i64> {
        let a = self.0?;
        let b = other.0?;
        Some((b.as_second() - a.as_second()).div_euclid(86_400))
    }

    /// Adds a day offset, anchoring an absent base at the current instant.
    ///
    /// Calendar arithmetic runs in UTC. An offset too large to represent
    /// leaves the anchor unchanged rather than overflowing.
    pub fn add_days(&self, days: i64) -> CanonicalDate {
        let anchor = self.0.unwrap_or_else(Timestamp::now);
        let zoned = anchor.to_zoned(TimeZone::UTC);
        match Span::new()
            .try_days(days)
            .and_then(|span| zoned.checked_add(span))
        {
            Ok(shifted) => CanonicalDate(Some(shifted.timestamp())),
            Err(_) => CanonicalDate(Some(anchor)),
        }
    }
}

impl From<Timestamp> for CanonicalDate {
    fn from(ts: Timestamp) -> Self {
        Self(Some(ts))
    }
}

impl From<RawDateValue> for CanonicalDate {
    /// Resolves an external shape in fixed priority order: timestamp record,
    /// numeric epoch, string parse. The first conversion that yields a real
    /// instant wins; everything else degrades to absence.
    fn from(raw: RawDateValue) -> Self {
        match raw {
            RawDateValue::TimestampRecord {
                seconds,
                nanoseconds,
            } => {
                let nanos = i32::try_from(nanoseconds).unwrap_or(0);
                Self(Timestamp::new(seconds, nanos).ok())
            }
            RawDateValue::EpochMillis(ms) => Self(Timestamp::from_millisecond(ms).ok()),
            RawDateValue::Iso(text) => parse_date_text(&text),
            RawDateValue::Other(value) => match value {
                serde_json::Value::Number(n) => {
                    // Integer epochs matched the EpochMillis arm already;
                    // what remains is floats (fractional milliseconds).
                    let ms = n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64);
                    Self(ms.and_then(|ms| Timestamp::from_millisecond(ms).ok()))
                }
                _ => Self::absent(),
            },
        }
    }
}

/// Parses date text, trying progressively looser calendar forms in UTC.
fn parse_date_text(text: &str) -> CanonicalDate {
    let trimmed = text.trim();
    if let Ok(ts) = trimmed.parse::<Timestamp>() {
        return CanonicalDate(Some(ts));
    }
    if let Ok(dt) = trimmed.parse::<civil::DateTime>() {
        if let Ok(zoned) = dt.to_zoned(TimeZone::UTC) {
            return CanonicalDate(Some(zoned.timestamp()));
        }
    }
    if let Ok(date) = trimmed.parse::<civil::Date>() {
        if let Ok(zoned) = date.to_zoned(TimeZone::UTC) {
            return CanonicalDate(Some(zoned.timestamp()));
        }
    }
    CanonicalDate::absent()
}

impl Serialize for CanonicalDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(ts) => serializer.serialize_str(&ts.to_string()),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for CanonicalDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawDateValue::deserialize(deserializer)?;
        Ok(CanonicalDate::from(raw))
    }
}
