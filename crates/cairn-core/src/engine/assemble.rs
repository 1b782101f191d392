//! Plan assembly: intent text plus raw response text to a complete plan.

use jiff::Timestamp;

use super::PlanEngine;
use crate::{
    dates::CanonicalDate,
    models::{Milestone, MilestoneStub, Plan},
    parser::{self, ellipsize},
    scheduler, timeframe,
};

/// Bound on the intent excerpt used in titles and default summaries.
const TITLE_INTENT_LEN: usize = 40;

/// Generic tags appended, as a last resort, when the response supplied
/// fewer than the target count.
const FILLER_TAGS: [&str; 3] = ["goal", "planning", "progress"];

impl PlanEngine {
    /// Assembles a complete plan from intent text and raw response text.
    ///
    /// The pipeline: extract the timeframe from the intent, parse the
    /// response, schedule the stubs against the base date, normalize tags,
    /// and compose the narrative description. When parsing recovers zero
    /// milestones the engine substitutes its deterministic default plan;
    /// this method is total and always returns a usable, non-empty plan.
    pub fn assemble_plan(&self, intent: &str, raw_response: &str) -> Plan {
        let timeframe_days = timeframe::extract_days(intent);
        let parsed = parser::parse_response(raw_response);

        let base = self.base_date.unwrap_or_else(CanonicalDate::now).or_now();
        let created_at = base.timestamp().unwrap_or_else(Timestamp::now);

        let (summary, stubs) = if parsed.stubs.is_empty() {
            log::warn!("No milestones recovered from response text; using the default plan");
            (
                default_summary(intent, timeframe_days),
                default_stubs(timeframe_days),
            )
        } else {
            (parsed.summary, parsed.stubs)
        };

        let milestones = scheduler::schedule(&stubs, &base, timeframe_days);
        let tags = normalize_tags(parsed.tags, self.tag_target);
        let title = derive_title(intent, timeframe_days);
        let description = compose_description(&summary, &milestones, &tags);

        Plan {
            title,
            description,
            tags,
            milestones,
            original_intent: intent.to_string(),
            timeframe_days,
            created_at,
        }
    }
}

/// The fixed generic milestones used when nothing could be parsed: one per
/// day for short horizons, a three-phase breakdown otherwise.
fn default_stubs(timeframe_days: u32) -> Vec<MilestoneStub> {
    if timeframe_days <= 3 {
        return (1..=timeframe_days)
            .map(|day| MilestoneStub {
                title: format!("Day {day} session"),
                description: format!(
                    "Dedicated working session {day} of {timeframe_days} toward the goal"
                ),
                day_range: format!("day {day}"),
            })
            .collect();
    }

    let first_end = timeframe_days.div_ceil(3);
    let second_end = (2 * timeframe_days).div_ceil(3);
    vec![
        phase_stub(
            "Getting started",
            "Get oriented and lay the groundwork",
            1,
            first_end,
        ),
        phase_stub(
            "Building momentum",
            "Build momentum with focused, repeatable practice",
            first_end + 1,
            second_end,
        ),
        phase_stub(
            "Finishing strong",
            "Consolidate progress and finish strong",
            second_end + 1,
            timeframe_days,
        ),
    ]
}

fn phase_stub(title: &str, description: &str, start: u32, end: u32) -> MilestoneStub {
    let day_range = if start == end {
        format!("day {start}")
    } else {
        format!("days {start}-{end}")
    };
    MilestoneStub {
        title: title.to_string(),
        description: description.to_string(),
        day_range,
    }
}

fn default_summary(intent: &str, timeframe_days: u32) -> String {
    let goal = intent.trim();
    if goal.is_empty() {
        format!("A {timeframe_days}-day plan broken into steady milestones")
    } else {
        format!(
            "A {timeframe_days}-day plan for: {}",
            ellipsize(goal, TITLE_INTENT_LEN)
        )
    }
}

fn derive_title(intent: &str, timeframe_days: u32) -> String {
    let goal = intent.trim();
    if goal.is_empty() {
        format!("{timeframe_days}-Day Plan")
    } else {
        format!(
            "{timeframe_days}-Day Plan: {}",
            ellipsize(goal, TITLE_INTENT_LEN)
        )
    }
}

/// Truncates or pads a tag list toward the target count.
///
/// Filler tags are appended only when the response supplied too few, and
/// only ones not already present. The list is never left empty for a
/// non-zero target.
fn normalize_tags(mut tags: Vec<String>, target: usize) -> Vec<String> {
    tags.truncate(target);
    for filler in FILLER_TAGS {
        if tags.len() >= target {
            break;
        }
        if !tags.iter().any(|t| t == filler) {
            tags.push(filler.to_string());
        }
    }
    tags
}

/// Reconstructs the narrative description in the fixed, parseable layout.
///
/// The layout matches what the response parser recognizes, so the composed
/// text can be fed back through it and recover the same milestone count
/// and day-ranges.
fn compose_description(summary: &str, milestones: &[Milestone], tags: &[String]) -> String {
    let mut out = format!("Overview: {summary}\n\nMilestones:\n");

    for (position, milestone) in milestones.iter().enumerate() {
        let number = position + 1;
        if milestone.day_range.is_empty() {
            out.push_str(&format!("Milestone {number}: {}\n", milestone.description));
        } else {
            out.push_str(&format!(
                "Milestone {number} ({}): {}\n",
                milestone.day_range, milestone.description
            ));
        }
    }

    if !tags.is_empty() {
        let tag_line: Vec<String> = tags.iter().map(|t| format!("#{t}")).collect();
        out.push_str(&format!("\nTags: {}\n", tag_line.join(" ")));
    }

    out
}
