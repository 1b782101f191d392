//! Timeframe extraction from free-form intent text.
//!
//! Pulls an integer day-count out of phrases like "in 3 days learn the
//! basics" or "a 10-day reading challenge". The scheduling layer assumes a
//! bounded horizon, so extracted values are clamped to a supported range and
//! absence falls back to a default rather than an error.

use std::sync::OnceLock;

use regex::Regex;

/// Shortest supported planning horizon, in days.
pub const MIN_DAYS: u32 = 3;

/// Longest supported planning horizon, in days.
pub const MAX_DAYS: u32 = 30;

/// Horizon used when the text names no day-count at all.
pub const DEFAULT_DAYS: u32 = 7;

/// Ordered day-count patterns. Earlier patterns are more specific; the first
/// one that matches anywhere in the text wins.
struct TimeframePatterns {
    within_n_days: Regex,
    in_n_days: Regex,
    n_day: Regex,
    n_days: Regex,
}

fn patterns() -> &'static TimeframePatterns {
    static PATTERNS: OnceLock<TimeframePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| TimeframePatterns {
        // "within 5 days"
        within_n_days: Regex::new(r"(?i)\bwithin\s+(\d{1,4})\s*days?\b").unwrap(),
        // "in 3 days"
        in_n_days: Regex::new(r"(?i)\bin\s+(\d{1,4})\s*days?\b").unwrap(),
        // "10-day", "10 day plan"
        n_day: Regex::new(r"(?i)\b(\d{1,4})[-\s]day\b").unwrap(),
        // "3 days"
        n_days: Regex::new(r"(?i)\b(\d{1,4})\s*days\b").unwrap(),
    })
}

/// Extracts the planning horizon in days from intent text.
///
/// Scans the ordered pattern set; the first captured integer is clamped to
/// `[MIN_DAYS, MAX_DAYS]`. Out-of-range values are valid input with a defined
/// normalization, not an error. No match yields [`DEFAULT_DAYS`].
///
/// # Examples
///
/// ```rust
/// use cairn_core::timeframe::extract_days;
///
/// assert_eq!(extract_days("in 3 days learn chess openings"), 3);
/// assert_eq!(extract_days("a 300 day odyssey"), 30);
/// assert_eq!(extract_days("learn chess openings"), 7);
/// ```
pub fn extract_days(text: &str) -> u32 {
    let p = patterns();
    let ordered = [&p.within_n_days, &p.in_n_days, &p.n_day, &p.n_days];

    for pattern in ordered {
        if let Some(caps) = pattern.captures(text) {
            if let Ok(days) = caps[1].parse::<u32>() {
                let clamped = days.clamp(MIN_DAYS, MAX_DAYS);
                if clamped != days {
                    log::debug!("Clamped timeframe {days} to {clamped} days");
                }
                return clamped;
            }
        }
    }
    DEFAULT_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_in_n_days() {
        assert_eq!(extract_days("in 3 days learn the guitar"), 3);
        assert_eq!(extract_days("In 12 Days run a 10k"), 12);
    }

    #[test]
    fn test_extract_within_n_days() {
        assert_eq!(extract_days("finish the draft within 10 days"), 10);
    }

    #[test]
    fn test_extract_hyphenated_day() {
        assert_eq!(extract_days("a 5-day meal prep challenge"), 5);
        assert_eq!(extract_days("start a 21 day habit"), 21);
    }

    #[test]
    fn test_extract_plain_days() {
        assert_eq!(extract_days("I have 14 days before the exam"), 14);
    }

    #[test]
    fn test_clamp_ceiling() {
        assert_eq!(extract_days("learn Japanese in 300 days"), MAX_DAYS);
    }

    #[test]
    fn test_clamp_floor() {
        assert_eq!(extract_days("cram everything in 1 day"), MIN_DAYS);
        assert_eq!(extract_days("in 0 days"), MIN_DAYS);
    }

    #[test]
    fn test_no_match_defaults() {
        assert_eq!(extract_days("learn to juggle"), DEFAULT_DAYS);
        assert_eq!(extract_days(""), DEFAULT_DAYS);
    }

    #[test]
    fn test_first_pattern_wins() {
        // "within" is more specific than the trailing bare "7 days".
        assert_eq!(extract_days("within 4 days, not 7 days"), 4);
    }

    #[test]
    fn test_boundaries_pass_through() {
        assert_eq!(extract_days("in 3 days"), 3);
        assert_eq!(extract_days("in 30 days"), 30);
    }
}
