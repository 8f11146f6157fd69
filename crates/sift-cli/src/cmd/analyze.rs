//! `sift analyze`: rank a task list with a selectable strategy.

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use tracing::info;

use crate::output::{OutputMode, render_ranked};

use super::input::{load_config, load_tasks};

/// Arguments for `sift analyze`.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Task list as a JSON array (`-` reads stdin).
    pub tasks: PathBuf,

    /// Scoring strategy: fastest_wins, high_impact, deadline_driven, or
    /// smart_balance.
    #[arg(long, default_value = "smart_balance")]
    pub strategy: String,

    /// TOML file with weight and threshold overrides.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Reference date for due-date math (YYYY-MM-DD; defaults to today).
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

/// Execute `sift analyze`.
pub fn run_analyze(args: &AnalyzeArgs, output: OutputMode, quiet: bool) -> Result<()> {
    let tasks = load_tasks(&args.tasks)?;
    let config = load_config(args.config.as_deref())?;

    let scored = sift_triage::analyze(tasks, &args.strategy, config.as_ref(), args.today)?;

    info!(strategy = %args.strategy, ranked = scored.len(), "analysis finished");
    render_ranked(output, &scored, quiet)
}
