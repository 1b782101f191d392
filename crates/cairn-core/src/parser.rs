//! Parsing of semi-structured plan response text.
//!
//! The text-generation service is *expected* to emit three labeled sections:
//!
//! ```text
//! Overview: <one-line summary>
//!
//! Milestones:
//! Milestone 1 (day 1): <description>
//! Milestone 2 (days 2-4): <description>
//!
//! Tags: #tag1 #tag2
//! ```
//!
//! Nothing guarantees it actually does. This parser extracts whatever
//! structure is present and represents what is missing explicitly: absent
//! sections degrade to fallbacks, and a response with no recognizable
//! structure at all still yields a valid (empty-milestone) result. Parsing
//! is total over `&str` and never returns an error.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::MilestoneStub;

/// Upper bound on the extracted summary, in characters.
pub const SUMMARY_MAX_LEN: usize = 200;

/// Upper bound on a derived milestone title, in characters.
const TITLE_MAX_LEN: usize = 60;

/// The three-part structure recovered from response text.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResponse {
    /// Overview text, or a bounded prefix of the raw text when no overview
    /// label was found
    pub summary: String,

    /// Milestone stubs in order of appearance. The numbering in the text is
    /// not trusted for ordering.
    pub stubs: Vec<MilestoneStub>,

    /// Deduplicated tags, in order of appearance; not yet padded or
    /// truncated to the product's preferred count
    pub tags: Vec<String>,
}

struct ResponsePatterns {
    overview: Regex,
    milestone_line: Regex,
    milestones_header: Regex,
    tags_line: Regex,
}

fn patterns() -> &'static ResponsePatterns {
    static PATTERNS: OnceLock<ResponsePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| ResponsePatterns {
        // "Overview: ..." anywhere in the text
        overview: Regex::new(r"(?im)^\s*overview\s*:\s*(.*)$").unwrap(),
        // "Milestone 3 (days 2-4): ..."; the day-range parens are optional
        // so that a numbered line without one still yields a stub
        milestone_line: Regex::new(
            r"(?im)^\s*(?:[-*]\s*)?milestone\s+(\d+)\s*(?:\(([^)]*)\))?\s*:\s*(.*)$",
        )
        .unwrap(),
        // The bare section header above the milestone list
        milestones_header: Regex::new(r"(?im)^\s*milestones\s*:\s*$").unwrap(),
        // "Tags: #a #b"
        tags_line: Regex::new(r"(?im)^\s*tags\s*:\s*(.*)$").unwrap(),
    })
}

/// Extracts summary, milestone stubs, and tags from raw response text.
pub fn parse_response(raw: &str) -> ParsedResponse {
    let p = patterns();

    let summary = match extract_summary(raw, p) {
        Some(summary) => summary,
        None => {
            log::warn!("Response has no overview section, using text prefix");
            fallback_summary(raw)
        }
    };

    let stubs: Vec<MilestoneStub> = p
        .milestone_line
        .captures_iter(raw)
        .enumerate()
        .map(|(i, caps)| {
            let day_range = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
            let description = caps.get(3).map(|m| m.as_str().trim()).unwrap_or("");
            stub_at(i + 1, day_range, description)
        })
        .collect();
    if stubs.is_empty() {
        log::warn!("Response has no recognizable milestone lines");
    }

    let tags = match p.tags_line.captures(raw) {
        Some(caps) => split_tags(&caps[1]),
        None => {
            log::warn!("Response has no tag line");
            Vec::new()
        }
    };

    ParsedResponse {
        summary,
        stubs,
        tags,
    }
}

/// Text following the overview label, up to the next recognized section.
fn extract_summary(raw: &str, p: &ResponsePatterns) -> Option<String> {
    let caps = p.overview.captures(raw)?;
    let mut parts: Vec<&str> = Vec::new();

    let first = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
    if !first.is_empty() {
        parts.push(first);
    }

    // An overview may spill onto following lines; collect until a section
    // label, a milestone line, or (once there is content) a blank line.
    let tail = &raw[caps.get(0).map(|m| m.end()).unwrap_or(raw.len())..];
    // The match ends just before its trailing newline; skip it so it does
    // not read as an empty continuation line.
    let tail = tail.strip_prefix('\n').unwrap_or(tail);
    for line in tail.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if parts.is_empty() {
                continue;
            }
            break;
        }
        if p.milestones_header.is_match(trimmed)
            || p.milestone_line.is_match(trimmed)
            || p.tags_line.is_match(trimmed)
        {
            break;
        }
        parts.push(trimmed);
    }

    if parts.is_empty() {
        None
    } else {
        Some(ellipsize(&parts.join(" "), SUMMARY_MAX_LEN))
    }
}

/// First non-empty line of the raw text, bounded; a fixed placeholder when
/// there is nothing at all.
fn fallback_summary(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| ellipsize(line, SUMMARY_MAX_LEN))
        .unwrap_or_else(|| "A step-by-step plan".to_string())
}

/// Builds a stub from one matched milestone line.
///
/// `position` is the 1-based order of appearance, used for placeholder text
/// when the description is empty. Losing a milestone is worse than carrying
/// a placeholder, so empty captures never drop the line.
fn stub_at(position: usize, day_range: &str, description: &str) -> MilestoneStub {
    let description = if description.is_empty() {
        format!("Milestone {position}")
    } else {
        description.to_string()
    };
    MilestoneStub {
        title: ellipsize(&description, TITLE_MAX_LEN),
        description,
        day_range: day_range.to_string(),
    }
}

/// Splits a tag line on whitespace and commas, strips `#` markers,
/// normalizes to lowercase, and removes duplicates preserving order.
fn split_tags(line: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for token in line.split([' ', '\t', ',']) {
        let tag = token.trim().trim_start_matches('#').to_lowercase();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// Shortens text to at most `max_chars`, cutting at a word boundary and
/// appending an ellipsis.
pub(crate) fn ellipsize(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    let cut = match cut.rfind(' ') {
        Some(i) if i > 0 => &cut[..i],
        _ => cut.as_str(),
    };
    format!("{}...", cut.trim_end_matches([',', ';', ':', '.']))
}
