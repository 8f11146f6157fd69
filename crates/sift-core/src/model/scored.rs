//! Enriched output records produced by scoring.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::task::{Task, TaskId};

/// Coarse priority bucket derived from a score via the configured
/// thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityLevel {
    High,
    Medium,
    Low,
}

impl PriorityLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task together with its computed ranking.
///
/// Serializes flat: every field the caller sent in, plus the enrichment
/// fields. `has_cycle` appears only when true, and `dependents_count`
/// (inside the task) only when the task had an identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTask {
    #[serde(flatten)]
    pub task: Task,

    /// Final score, rounded to two decimal places.
    pub score: f64,

    pub priority_level: PriorityLevel,

    /// Human-readable derivation of the score.
    pub explanation: String,

    /// True only for tasks inside a detected dependency cycle.
    #[serde(default, skip_serializing_if = "is_false")]
    pub has_cycle: bool,
}

impl ScoredTask {
    /// The underlying task's identifier, if it has one.
    #[must_use]
    pub const fn id(&self) -> Option<&TaskId> {
        self.task.id.as_ref()
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(flag: &bool) -> bool {
    !*flag
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(score: f64, has_cycle: bool) -> ScoredTask {
        ScoredTask {
            task: Task {
                id: Some(TaskId::from("t1")),
                title: "A".to_string(),
                dependents_count: Some(2),
                ..Task::default()
            },
            score,
            priority_level: PriorityLevel::Medium,
            explanation: "test".to_string(),
            has_cycle,
        }
    }

    #[test]
    fn serializes_flat_over_the_task() {
        let json = serde_json::to_value(scored(6.5, false)).expect("serialize");

        assert_eq!(json["id"], "t1");
        assert_eq!(json["title"], "A");
        assert_eq!(json["dependents_count"], 2);
        assert_eq!(json["score"], 6.5);
        assert_eq!(json["priority_level"], "Medium");
        assert!(json.get("has_cycle").is_none(), "absent unless true");
    }

    #[test]
    fn cycle_flag_serialized_when_set() {
        let json = serde_json::to_value(scored(6.5, true)).expect("serialize");
        assert_eq!(json["has_cycle"], true);
    }

    #[test]
    fn priority_level_names() {
        assert_eq!(PriorityLevel::High.as_str(), "High");
        assert_eq!(PriorityLevel::Medium.to_string(), "Medium");
        assert_eq!(
            serde_json::to_string(&PriorityLevel::Low).expect("serialize"),
            "\"Low\""
        );
    }
}
