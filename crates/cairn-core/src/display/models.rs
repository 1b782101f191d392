//! Display implementations for domain models.
//!
//! All output is markdown: headers for plans and milestones, list items for
//! metadata, status icons for completion state.

use std::fmt;

use super::datetime::{CalendarDay, LocalDateTime};
use crate::models::{Milestone, Plan, TaskProgressView, TaskStatus};

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Timeframe: {} days", self.timeframe_days)?;
        if !self.tags.is_empty() {
            let tag_line: Vec<String> = self.tags.iter().map(|t| format!("#{t}")).collect();
            writeln!(f, "- Tags: {}", tag_line.join(" "))?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        // The narrative already itemizes the milestones; print it as the
        // body instead of re-rendering the structured list next to it.
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;

        Ok(())
    }
}

impl Milestone {
    fn completion_icon(&self) -> &'static str {
        if self.is_completed {
            "✓ Done"
        } else {
            "○ Pending"
        }
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.title, self.completion_icon())?;
        writeln!(f)?;

        writeln!(f, "- Due: {}", CalendarDay(&self.target_date))?;
        if self.completed_date.is_present() {
            writeln!(f, "- Completed: {}", CalendarDay(&self.completed_date))?;
        }

        writeln!(f)?;
        writeln!(f, "{}", self.description)?;

        Ok(())
    }
}

impl fmt::Display for TaskProgressView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}/{} milestones ({}%)",
            self.status.with_icon(),
            self.completed_count,
            self.total_count,
            self.percentage
        )
    }
}
