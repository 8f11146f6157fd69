//! The task input entity and its adaptation boundary.

use std::fmt;

use chrono::NaiveDate;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ---------------------------------------------------------------------------
// TaskId
// ---------------------------------------------------------------------------

/// Opaque task identifier.
///
/// Task sources disagree on the wire type: hand-written input uses strings
/// while records exported from a relational store carry integer primary
/// keys. Deserialization accepts both and normalizes to the string form;
/// serialization always emits a string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TaskId(String);

impl TaskId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = TaskId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer task identifier")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<TaskId, E> {
                Ok(TaskId(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<TaskId, E> {
                Ok(TaskId(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<TaskId, E> {
                Ok(TaskId(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

// ---------------------------------------------------------------------------
// DependencyRef
// ---------------------------------------------------------------------------

/// One entry in a task's dependency list.
///
/// Callers supply dependencies in two shapes: a plain identifier, or a
/// structured reference exposing an `id` field (tasks round-tripped through
/// a persistence layer keep their full record). Both normalize to a
/// [`TaskId`] through [`DependencyRef::id`]; nothing past this boundary
/// re-detects shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependencyRef {
    /// Structured reference: `{"id": …}`. Extra fields are ignored.
    Record { id: TaskId },
    /// Plain identifier: `"t1"` or `7`.
    Id(TaskId),
}

impl DependencyRef {
    /// The normalized identifier for this reference.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        match self {
            Self::Record { id } | Self::Id(id) => id,
        }
    }
}

// ---------------------------------------------------------------------------
// DueDate
// ---------------------------------------------------------------------------

/// A task deadline as supplied by the caller.
///
/// Due dates arrive as strings. A string that parses as an ISO `YYYY-MM-DD`
/// date becomes [`DueDate::Date`]; anything else is retained verbatim as
/// [`DueDate::Invalid`] so scoring can report it without failing the whole
/// analysis. A malformed date is never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DueDate {
    Date(NaiveDate),
    Invalid(String),
}

impl DueDate {
    /// The calendar date, if the input was parseable.
    #[must_use]
    pub const fn parsed(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            Self::Invalid(_) => None,
        }
    }
}

impl Serialize for DueDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Date(date) => serializer.collect_str(date),
            Self::Invalid(raw) => serializer.serialize_str(raw),
        }
    }
}

impl<'de> Deserialize<'de> for DueDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.parse::<NaiveDate>() {
            Ok(date) => Ok(Self::Date(date)),
            Err(_) => Ok(Self::Invalid(raw)),
        }
    }
}

// ---------------------------------------------------------------------------
// Task
// ---------------------------------------------------------------------------

/// A unit of work to rank.
///
/// Read-only to the engine apart from [`dependents_count`], which the
/// dependents counter fills in. Every field tolerates absence: the engine
/// favors producing a ranking over rejecting input, and real validation
/// belongs to the adapter that accepted the data.
///
/// [`dependents_count`]: Task::dependents_count
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier. Absent for not-yet-persisted tasks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,

    /// Display title.
    #[serde(default)]
    pub title: String,

    /// Optional deadline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DueDate>,

    /// Estimated effort in hours. Unknown when absent; non-positive values
    /// are treated as unknown by the strategies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,

    /// Importance on a nominal 1-10 scale. Not clamped: out-of-range values
    /// pass through and skew weighted scores accordingly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<i32>,

    /// Tasks this task depends on, in input order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<DependencyRef>,

    /// How many input tasks depend on this one. Set by the dependents
    /// counter; never present for tasks without an identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependents_count: Option<usize>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
