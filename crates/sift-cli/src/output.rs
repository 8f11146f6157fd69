//! Human/JSON output parity for ranked results.
//!
//! Every command renders through [`render_ranked`]: a ranked table for
//! humans, or a stable JSON array for machines. JSON output is exactly the
//! serialized [`ScoredTask`] records, so piping `--json` into another tool
//! round-trips the analysis.

use std::io::{self, Write};

use sift_core::model::{ScoredTask, TaskId};

/// Shared width for human output separators.
pub const PRETTY_RULE_WIDTH: usize = 72;

/// The two output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-optimized ranked table.
    Human,
    /// Machine-readable JSON array.
    Json,
}

/// Render ranked tasks to stdout in the selected mode.
///
/// `quiet` drops the per-task explanation lines from human output.
///
/// # Errors
///
/// Returns an error if serialization or writing to stdout fails.
pub fn render_ranked(mode: OutputMode, tasks: &[ScoredTask], quiet: bool) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    match mode {
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut out, tasks)?;
            writeln!(out)?;
        }
        OutputMode::Human => render_table(&mut out, tasks, quiet)?,
    }
    Ok(())
}

fn render_table(w: &mut dyn Write, tasks: &[ScoredTask], quiet: bool) -> io::Result<()> {
    if tasks.is_empty() {
        return writeln!(w, "no tasks to rank");
    }

    writeln!(
        w,
        "{:>4}  {:>6}  {:<8}  {:<10}  TITLE",
        "RANK", "SCORE", "PRIORITY", "ID"
    )?;
    writeln!(w, "{:-<width$}", "", width = PRETTY_RULE_WIDTH)?;

    for (position, task) in tasks.iter().enumerate() {
        let id = task.id().map_or("-", TaskId::as_str);
        let cycle = if task.has_cycle { "  [cycle]" } else { "" };

        writeln!(
            w,
            "{:>4}  {:>6.2}  {:<8}  {:<10}  {}{}",
            position + 1,
            task.score,
            task.priority_level,
            id,
            task.task.title,
            cycle
        )?;

        if !quiet {
            writeln!(w, "      {}", task.explanation)?;
        }
    }

    Ok(())
}
