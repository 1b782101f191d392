//! Milestone scheduling: day-range tokens to absolute target dates.
//!
//! Each parsed stub carries a textual day-range token ("day 3",
//! "days 2-4"). Scheduling resolves the token to a day offset inside the
//! planning horizon, anchors it at the base date, and produces the final
//! ordered milestone list. A token that cannot be resolved never drops its
//! milestone: mis-dating one is recoverable, losing one is not.

use std::sync::OnceLock;

use regex::Regex;

use crate::{
    dates::CanonicalDate,
    models::{Milestone, MilestoneStub},
};

/// "day K" or "days K-M" (also tolerating "to" and an en dash as the range
/// separator). A range resolves to its END day: the milestone is due when
/// its window closes, not when it opens.
fn day_range_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^\s*days?\s+(\d{1,4})(?:\s*(?:-|–|to)\s*(\d{1,4}))?\s*$").unwrap()
    })
}

/// Parses a day-range token to its due day, ignoring bounds.
fn parse_day_range(token: &str) -> Option<u32> {
    let caps = day_range_pattern().captures(token)?;
    let start: u32 = caps[1].parse().ok()?;
    match caps.get(2) {
        Some(end) => end.as_str().parse().ok(),
        None => Some(start),
    }
}

/// Resolves a token to an offset within `1..=timeframe_days`.
///
/// Unparsable or out-of-bounds tokens fall back to the horizon midpoint,
/// a neutral default that keeps the milestone inside the plan window. The
/// event is logged for observability but never aborts scheduling.
fn resolve_offset(day_range: &str, timeframe_days: u32) -> u32 {
    let midpoint = timeframe_days.div_ceil(2);
    match parse_day_range(day_range) {
        Some(day) if (1..=timeframe_days).contains(&day) => day,
        Some(day) => {
            log::warn!(
                "Day-range '{day_range}' resolves to day {day}, outside 1..={timeframe_days}; \
                 defaulting to day {midpoint}"
            );
            midpoint
        }
        None => {
            log::warn!("Unparsable day-range '{day_range}'; defaulting to day {midpoint}");
            midpoint
        }
    }
}

/// Converts stubs into dated milestones anchored at `base_date`.
///
/// An absent base date degrades to the current instant. The result is
/// sorted ascending by target date: a defaulted offset can otherwise land a
/// later-listed milestone before an earlier one. The sort is stable, so
/// milestones due the same day keep their order of appearance.
pub fn schedule(
    stubs: &[MilestoneStub],
    base_date: &CanonicalDate,
    timeframe_days: u32,
) -> Vec<Milestone> {
    let anchor = base_date.or_now();

    let mut milestones: Vec<Milestone> = stubs
        .iter()
        .map(|stub| {
            let offset = resolve_offset(&stub.day_range, timeframe_days);
            Milestone::from_stub(stub, anchor.add_days(i64::from(offset)))
        })
        .collect();

    milestones.sort_by_key(|m| {
        m.target_date
            .timestamp()
            .map(|ts| ts.as_second())
            .unwrap_or(i64::MAX)
    });
    milestones
}
