//! Command handlers for the Cairn CLI.

use std::{fs, io, path::Path};

use anyhow::{Context, Result};
use cairn_core::{display::CalendarDay, progress, Plan, PlanEngine, TaskProgressView};
use uuid::Uuid;

use crate::renderer::TerminalRenderer;

/// Dispatches parsed commands against the engine and the filesystem.
pub struct Cli {
    engine: PlanEngine,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(engine: PlanEngine, renderer: TerminalRenderer) -> Self {
        Self { engine, renderer }
    }

    /// Assemble a plan from intent text and raw response text.
    pub fn generate(
        &self,
        intent: &str,
        response_file: Option<&Path>,
        output: Option<&Path>,
        json: bool,
    ) -> Result<()> {
        let raw = match response_file {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read response file {}", path.display()))?,
            None => io::read_to_string(io::stdin())
                .context("Failed to read response text from stdin")?,
        };

        let plan = self.engine.assemble_plan(intent, &raw);
        log::info!(
            "Assembled a {}-day plan with {} milestones",
            plan.timeframe_days,
            plan.milestones.len()
        );

        if let Some(path) = output {
            write_plan(path, &plan)?;
        }

        if json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        } else {
            self.renderer.render(&plan_markdown(&plan))?;
        }
        Ok(())
    }

    /// Render a saved plan record with its current progress.
    pub fn show(&self, plan_file: &Path) -> Result<()> {
        let plan = read_plan(plan_file)?;
        let view = TaskProgressView::compute(&plan.milestones, 0);

        self.renderer.render(&plan_markdown(&plan))?;
        self.renderer.render(&format!("\n{view}\n"))?;
        Ok(())
    }

    /// Set or clear one milestone's completion flag and persist the result.
    pub fn toggle(&self, plan_file: &Path, id: Uuid, completed: bool) -> Result<()> {
        let mut plan = read_plan(plan_file)?;

        let snapshot = progress::toggle(&plan.milestones, id, completed)?;
        let view = snapshot.view();
        plan.milestones = snapshot.milestones;
        write_plan(plan_file, &plan)?;

        self.renderer.render(&format!("{view}\n"))?;
        Ok(())
    }

    /// Clear every completion flag and persist the result.
    pub fn reset(&self, plan_file: &Path) -> Result<()> {
        let mut plan = read_plan(plan_file)?;

        let snapshot = progress::reset_all(&plan.milestones);
        let view = snapshot.view();
        plan.milestones = snapshot.milestones;
        write_plan(plan_file, &plan)?;

        self.renderer.render(&format!("{view}\n"))?;
        Ok(())
    }
}

/// The plan's markdown plus a milestone ID listing for toggle commands.
fn plan_markdown(plan: &Plan) -> String {
    let mut md = plan.to_string();
    if !plan.milestones.is_empty() {
        md.push_str("\n## Milestone IDs\n\n");
        for milestone in &plan.milestones {
            md.push_str(&format!(
                "- `{}` {} (due {})\n",
                milestone.id,
                milestone.title,
                CalendarDay(&milestone.target_date)
            ));
        }
    }
    md
}

fn read_plan(path: &Path) -> Result<Plan> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read plan record {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Plan record {} is not valid JSON", path.display()))
}

fn write_plan(path: &Path, plan: &Plan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan).context("Failed to serialize plan record")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write plan record {}", path.display()))
}
