//! Routine task descriptors.
//!
//! Tasks are static configuration, not timer state: the presence of a
//! duration decides whether a task gets a countdown engine or is a plain
//! checklist toggle. The engines never see these types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while validating a routine task list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    /// Task id cannot be empty.
    #[error("task id cannot be empty")]
    IdEmpty,
    /// Task label cannot be empty.
    #[error("task label cannot be empty (id: {0})")]
    LabelEmpty(String),
    /// A timed task needs a positive duration.
    #[error("task duration must be positive (id: {0})")]
    DurationZero(String),
    /// Task ids must be unique within a routine.
    #[error("duplicate task id: {0}")]
    DuplicateId(String),
}

/// One recurring task in the daily routine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineTask {
    /// Stable identifier, unique within the routine.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Countdown length in seconds. `None` means a plain checklist item
    /// with no timer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
}

impl RoutineTask {
    /// Creates an untimed checklist task.
    #[must_use]
    pub fn untimed(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            duration_seconds: None,
        }
    }

    /// Creates a task backed by a countdown of `duration_seconds`.
    #[must_use]
    pub fn timed(id: &str, label: &str, duration_seconds: u32) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            duration_seconds: Some(duration_seconds),
        }
    }

    /// Whether this task carries a countdown timer.
    #[must_use]
    pub const fn is_timed(&self) -> bool {
        self.duration_seconds.is_some()
    }

    /// Checks this task's own fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::IdEmpty`], [`TaskError::LabelEmpty`], or
    /// [`TaskError::DurationZero`] for the corresponding malformed field.
    pub fn validate(&self) -> Result<(), TaskError> {
        if self.id.trim().is_empty() {
            return Err(TaskError::IdEmpty);
        }
        if self.label.trim().is_empty() {
            return Err(TaskError::LabelEmpty(self.id.clone()));
        }
        if self.duration_seconds == Some(0) {
            return Err(TaskError::DurationZero(self.id.clone()));
        }
        Ok(())
    }
}

/// Validates a full routine: every task well-formed and ids unique.
///
/// # Errors
///
/// Returns the first per-task error encountered, or
/// [`TaskError::DuplicateId`] for a repeated id.
pub fn validate_routine(tasks: &[RoutineTask]) -> Result<(), TaskError> {
    let mut seen = std::collections::HashSet::new();
    for task in tasks {
        task.validate()?;
        if !seen.insert(task.id.as_str()) {
            return Err(TaskError::DuplicateId(task.id.clone()));
        }
    }
    Ok(())
}

/// The built-in daily routine, used when the config file defines no
/// `[[tasks]]` of its own.
#[must_use]
pub fn default_routine() -> Vec<RoutineTask> {
    vec![
        RoutineTask::timed(
            "read-github",
            "Read high-quality existing GitHub code",
            20 * 60,
        ),
        RoutineTask::timed("new-ai-tool", "Use a new AI tool", 30 * 60),
        RoutineTask::untimed(
            "generate-questions",
            "Generate 3 ChatGPT programming questions",
        ),
        RoutineTask::untimed(
            "commit-github",
            "Commit changes to codebase and push to GitHub",
        ),
    ]
}
