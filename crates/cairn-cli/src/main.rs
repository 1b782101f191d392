//! Cairn CLI Application
//!
//! Command-line host for the Cairn milestone planning engine. Assembles
//! plans from response text, stores them as JSON records, and applies
//! progress operations to saved plans.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use cairn_core::PlanEngine;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color, command } = Args::parse();

    let engine = PlanEngine::builder().build();
    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(engine, renderer);

    info!("Cairn started");

    match command {
        Generate {
            intent,
            response_file,
            output,
            json,
        } => cli.generate(&intent, response_file.as_deref(), output.as_deref(), json),
        Show { plan_file } => cli.show(&plan_file),
        Toggle {
            plan_file,
            id,
            undo,
        } => cli.toggle(&plan_file, id, !undo),
        Reset { plan_file } => cli.reset(&plan_file),
    }
}
