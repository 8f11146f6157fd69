//! Weighted multi-factor scoring: urgency, importance, effort, and
//! dependency pressure combined on one 0-10 scale.

use chrono::NaiveDate;
use sift_core::config::{ASSUMED_EFFORT_HOURS, ScoringConfig};
use sift_core::model::{DueDate, ScoredTask, Task};

use super::{ScoringStrategy, effective_today, round2, sort_by_score};

/// Urgency decays half a point per day until the deadline — slower than
/// the deadline-driven strategy, since urgency is only one factor here.
const URGENCY_DECAY_PER_DAY: f64 = 0.5;

/// Effort loses half a point per estimated hour; 20 hours bottoms out at 0.
const EFFORT_DECAY_PER_HOUR: f64 = 0.5;

/// Dependency pressure per dependent task, capped at 10.
const PRESSURE_PER_DEPENDENT: f64 = 2.0;

/// The default strategy: a weighted sum of four sub-scores, each on its own
/// 0-10 scale.
///
/// The weighted sum is not re-normalized; weights that do not sum to 1
/// scale the result accordingly, and an out-of-range importance skews it.
/// Both behaviors are accepted, not corrected.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmartBalance;

impl ScoringStrategy for SmartBalance {
    fn score_tasks(
        &self,
        tasks: &[Task],
        config: Option<&ScoringConfig>,
        today: Option<NaiveDate>,
    ) -> Vec<ScoredTask> {
        let today = effective_today(today);
        let weights = config.map(|c| c.weights).unwrap_or_default();
        let thresholds = config.map(|c| c.thresholds).unwrap_or_default();

        let mut scored: Vec<ScoredTask> = tasks
            .iter()
            .map(|task| {
                let urgency = urgency_subscore(task.due_date.as_ref(), today);
                let importance = f64::from(task.importance.unwrap_or(0));
                let effort = effort_subscore(task.estimated_hours);
                let pressure = pressure_subscore(task.dependents_count);

                let total = urgency * weights.urgency
                    + importance * weights.importance
                    + effort * weights.effort
                    + pressure * weights.dependencies;

                ScoredTask {
                    task: task.clone(),
                    score: round2(total),
                    priority_level: thresholds.classify(total),
                    explanation: format!(
                        "Smart Score: {total:.1} (U:{urgency:.1}, I:{importance:.1}, E:{effort:.1})"
                    ),
                    has_cycle: false,
                }
            })
            .collect();

        sort_by_score(&mut scored);
        scored
    }
}

/// Due-date sub-score: overdue 10, today 9, otherwise a slow decay.
#[allow(clippy::cast_precision_loss)]
fn urgency_subscore(due: Option<&DueDate>, today: NaiveDate) -> f64 {
    let Some(date) = due.and_then(DueDate::parsed) else {
        return 0.0;
    };

    let days_until = (date - today).num_days();
    if days_until < 0 {
        10.0
    } else if days_until == 0 {
        9.0
    } else {
        (days_until as f64).mul_add(-URGENCY_DECAY_PER_DAY, 9.0).max(0.0)
    }
}

/// Effort sub-score: lower effort scores higher. An unusable estimate
/// (absent, zero, negative) is read as medium effort, not minimal effort.
fn effort_subscore(hours: Option<f64>) -> f64 {
    let effective = match hours {
        Some(h) if h > 0.0 => h,
        _ => ASSUMED_EFFORT_HOURS,
    };
    effective.mul_add(-EFFORT_DECAY_PER_HOUR, 10.0).max(0.0)
}

/// Dependency-pressure sub-score from the annotated dependents count.
#[allow(clippy::cast_precision_loss)]
fn pressure_subscore(dependents: Option<usize>) -> f64 {
    (dependents.unwrap_or(0) as f64 * PRESSURE_PER_DEPENDENT).min(10.0)
}
