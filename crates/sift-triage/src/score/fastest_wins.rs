//! Effort-inverse scoring: the quicker the task, the higher it ranks.

use chrono::NaiveDate;
use sift_core::config::ScoringConfig;
use sift_core::model::{ScoredTask, Task};

use super::{ScoringStrategy, round2, sort_by_score};

/// Floor for the effort figure, guarding the division against zero and
/// negative estimates.
const MIN_EFFECTIVE_HOURS: f64 = 0.5;

/// Prioritizes low estimated effort: `score = min(10, 10 / hours)`.
///
/// One hour scores 10, ten hours score 1; anything at or under half an
/// hour caps at 10.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastestWins;

impl ScoringStrategy for FastestWins {
    fn score_tasks(
        &self,
        tasks: &[Task],
        config: Option<&ScoringConfig>,
        _today: Option<NaiveDate>,
    ) -> Vec<ScoredTask> {
        let thresholds = config.map(|c| c.thresholds).unwrap_or_default();

        let mut scored: Vec<ScoredTask> = tasks
            .iter()
            .map(|task| {
                let hours = match task.estimated_hours {
                    Some(h) if h > 0.0 => h,
                    _ => MIN_EFFECTIVE_HOURS,
                };
                let score = (10.0 / hours).min(10.0);

                ScoredTask {
                    task: task.clone(),
                    score: round2(score),
                    priority_level: thresholds.classify(score),
                    explanation: format!("Fastest Win: {hours} hours estimated."),
                    has_cycle: false,
                }
            })
            .collect();

        sort_by_score(&mut scored);
        scored
    }
}
