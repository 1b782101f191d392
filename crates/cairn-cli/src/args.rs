use std::path::PathBuf;

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Main command-line interface for the Cairn planning tool
///
/// Cairn assembles milestone plans out of free-form planning text and tracks
/// their completion. Plan records are plain JSON files shaped like the
/// document-store records the engine targets, so the same files can be
/// inspected or produced by other tooling.
#[derive(Parser)]
#[command(version, about, name = "cairn")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Cairn CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Assemble a plan from intent text and a service response
    #[command(alias = "g")]
    Generate {
        /// The goal text, e.g. "in 7 days learn to draw"
        #[arg(long)]
        intent: String,

        /// File holding the raw service response; read from stdin when
        /// omitted. Empty or garbage input degrades to the default plan.
        #[arg(long)]
        response_file: Option<PathBuf>,

        /// Write the assembled plan record to this JSON file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print the plan record as JSON instead of markdown
        #[arg(long)]
        json: bool,
    },

    /// Render a saved plan record
    Show {
        /// Path to the plan record
        plan_file: PathBuf,
    },

    /// Set or clear one milestone's completion flag
    Toggle {
        /// Path to the plan record
        plan_file: PathBuf,

        /// ID of the milestone to toggle
        #[arg(long)]
        id: Uuid,

        /// Clear the completion flag instead of setting it
        #[arg(long)]
        undo: bool,
    },

    /// Clear every completion flag and restart progress
    Reset {
        /// Path to the plan record
        plan_file: PathBuf,
    },
}
