//! Due-date proximity scoring.

use chrono::NaiveDate;
use sift_core::config::ScoringConfig;
use sift_core::model::{DueDate, ScoredTask, Task};

use super::{ScoringStrategy, effective_today, round2, sort_by_score};

/// Prioritizes by deadline: overdue is 10, due today 9, then the score
/// drops by one per remaining day and floors at 0. Tasks without a usable
/// due date score 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeadlineDriven;

impl ScoringStrategy for DeadlineDriven {
    fn score_tasks(
        &self,
        tasks: &[Task],
        config: Option<&ScoringConfig>,
        today: Option<NaiveDate>,
    ) -> Vec<ScoredTask> {
        let today = effective_today(today);
        let thresholds = config.map(|c| c.thresholds).unwrap_or_default();

        let mut scored: Vec<ScoredTask> = tasks
            .iter()
            .map(|task| {
                let (score, explanation) = deadline_score(task.due_date.as_ref(), today);

                ScoredTask {
                    task: task.clone(),
                    score: round2(score),
                    priority_level: thresholds.classify(score),
                    explanation,
                    has_cycle: false,
                }
            })
            .collect();

        sort_by_score(&mut scored);
        scored
    }
}

/// Score and explanation for one due date against the reference date.
#[allow(clippy::cast_precision_loss)]
fn deadline_score(due: Option<&DueDate>, today: NaiveDate) -> (f64, String) {
    let Some(due) = due else {
        return (0.0, "No due date.".to_string());
    };
    let Some(date) = due.parsed() else {
        return (0.0, "Invalid due date.".to_string());
    };

    let days_until = (date - today).num_days();
    if days_until < 0 {
        (10.0, format!("Overdue by {} days.", -days_until))
    } else if days_until == 0 {
        (9.0, "Due today.".to_string())
    } else {
        let score = (9.0 - days_until as f64).max(0.0);
        (score, format!("Due in {days_until} days."))
    }
}
