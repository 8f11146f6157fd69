//! `sift suggest`: the top three tasks to work on today.

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

use crate::output::{OutputMode, render_ranked};

use super::input::{load_config, load_tasks};

/// Arguments for `sift suggest`.
#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Task list as a JSON array (`-` reads stdin).
    pub tasks: PathBuf,

    /// TOML file with weight and threshold overrides.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Reference date for due-date math (YYYY-MM-DD; defaults to today).
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

/// Execute `sift suggest`.
pub fn run_suggest(args: &SuggestArgs, output: OutputMode, quiet: bool) -> Result<()> {
    let tasks = load_tasks(&args.tasks)?;
    let config = load_config(args.config.as_deref())?;

    let top = sift_triage::suggest(tasks, config.as_ref(), args.today);
    render_ranked(output, &top, quiet)
}
