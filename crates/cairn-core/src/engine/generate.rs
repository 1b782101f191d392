//! Text-source orchestration for plan generation.
//!
//! The text-generation service is external: from the engine's point of view
//! it is an opaque async function from a prompt to raw text. Hosts
//! configure one or more [`PlanTextSource`] implementations (providers,
//! retries against a second vendor, canned fixtures) and hand them to
//! [`PlanEngine::generate_plan`], which tries them in order and treats the
//! first success as the winner. Credentials and provider selection live
//! entirely inside source implementations; the engine never sees them.

use async_trait::async_trait;

use super::PlanEngine;
use crate::{
    error::{PlanError, Result},
    models::Plan,
    timeframe,
};

/// An external producer of raw plan text.
#[async_trait]
pub trait PlanTextSource: Send + Sync {
    /// Short name used in logs and failure reports.
    fn name(&self) -> &str;

    /// Produces raw response text for the prompt.
    async fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}

/// A source that returns a fixed string, for tests and offline use.
pub struct StaticTextSource {
    name: String,
    text: String,
}

impl StaticTextSource {
    /// Creates a source that always answers with `text`.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

#[async_trait]
impl PlanTextSource for StaticTextSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, _prompt: &str) -> anyhow::Result<String> {
        Ok(self.text.clone())
    }
}

/// Builds the prompt asking the service for the three-section layout the
/// parser recognizes.
pub fn build_prompt(intent: &str, timeframe_days: u32) -> String {
    format!(
        "You are a goal planner. Break the goal below into concrete milestones \
spread across {timeframe_days} days.

Respond in exactly this layout:

Overview: <one-line summary of the plan>

Milestones:
Milestone 1 (day 1): <description>
Milestone 2 (days 2-4): <description>

Tags: #tag1 #tag2

Guidelines:
- Use between 3 and {timeframe_days} milestones
- Give every milestone a day or day range within the {timeframe_days}-day window
- Start each description with a verb and keep it on one line
- Provide exactly two tags

Goal: {intent}"
    )
}

/// Asks each source in order; the first success wins.
///
/// Returns [`PlanError::Generation`] listing every failure when no source
/// produces text.
pub async fn fetch_response(
    sources: &[Box<dyn PlanTextSource>],
    prompt: &str,
) -> Result<String> {
    let mut failures: Vec<String> = Vec::new();

    for source in sources {
        match source.generate(prompt).await {
            Ok(text) => {
                log::info!("Text source '{}' produced a response", source.name());
                return Ok(text);
            }
            Err(err) => {
                log::warn!("Text source '{}' failed: {err:#}", source.name());
                failures.push(format!("{}: {err:#}", source.name()));
            }
        }
    }

    Err(PlanError::generation(if failures.is_empty() {
        "no text sources configured".to_string()
    } else {
        failures.join("; ")
    }))
}

impl PlanEngine {
    /// Generates a plan for the intent using the configured sources.
    ///
    /// Never fails: when every source errors, the engine assembles from
    /// empty text, which yields the deterministic default plan. Hosts that
    /// need to distinguish a degraded result can call [`fetch_response`]
    /// themselves and inspect the error.
    pub async fn generate_plan(
        &self,
        intent: &str,
        sources: &[Box<dyn PlanTextSource>],
    ) -> Plan {
        let timeframe_days = timeframe::extract_days(intent);
        let prompt = build_prompt(intent, timeframe_days);

        let raw = match fetch_response(sources, &prompt).await {
            Ok(text) => text,
            Err(err) => {
                log::warn!("Falling back to the default plan: {err}");
                String::new()
            }
        };

        self.assemble_plan(intent, &raw)
    }
}
