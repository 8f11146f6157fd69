//! Importance-first scoring: the stated importance is the score.

use chrono::NaiveDate;
use sift_core::config::ScoringConfig;
use sift_core::model::{ScoredTask, Task};

use super::{ScoringStrategy, round2, sort_by_score};

/// Prioritizes stated importance directly: `score = importance`, 0 when
/// absent. Values outside the nominal 1-10 range pass through unclamped.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighImpact;

impl ScoringStrategy for HighImpact {
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
                let importance = task.importance.unwrap_or(0);
                let score = f64::from(importance);

                ScoredTask {
                    task: task.clone(),
                    score: round2(score),
                    priority_level: thresholds.classify(score),
                    explanation: format!("High Impact: Importance {importance}/10."),
                    has_cycle: false,
                }
            })
            .collect();

        sort_by_score(&mut scored);
        scored
    }
}

#[cfg(test)]
mod tests {
    use sift_core::model::{PriorityLevel, TaskId};

    use super::*;

    fn task(id: &str, importance: Option<i32>) -> Task {
        Task {
            id: Some(TaskId::from(id)),
            importance,
            ..Task::default()
        }
    }

    #[test]
    fn importance_is_the_score() {
        let scored = HighImpact.score_tasks(&[task("a", Some(8))], None, None);

        assert!((scored[0].score - 8.0).abs() < f64::EPSILON);
        assert_eq!(scored[0].priority_level, PriorityLevel::High);
        assert_eq!(scored[0].explanation, "High Impact: Importance 8/10.");
    }

    #[test]
    fn missing_importance_scores_zero() {
        let scored = HighImpact.score_tasks(&[task("a", None)], None, None);

        assert!(scored[0].score.abs() < f64::EPSILON);
        assert_eq!(scored[0].priority_level, PriorityLevel::Low);
        assert_eq!(scored[0].explanation, "High Impact: Importance 0/10.");
    }

    #[test]
    fn out_of_range_importance_passes_through() {
        let scored = HighImpact.score_tasks(&[task("a", Some(15))], None, None);
        assert!((scored[0].score - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ties_keep_input_order() {
        let scored = HighImpact.score_tasks(
            &[task("first", Some(5)), task("second", Some(5)), task("top", Some(9))],
            None,
            None,
        );

        assert_eq!(scored[0].id(), Some(&TaskId::from("top")));
        assert_eq!(scored[1].id(), Some(&TaskId::from("first")));
        assert_eq!(scored[2].id(), Some(&TaskId::from("second")));
    }
}
