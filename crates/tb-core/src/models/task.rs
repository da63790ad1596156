use crate::models::{
    new_id,
    priority::Priority,
    same_name,
    subtask::{Subtask, SubtaskProgress},
};

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub board_id: String,

    /// Id of the column holding this task.
    pub status: String,
    /// Zero-based rank within the (board, status) group.
    #[serde(default)]
    pub position: u32,

    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,

    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    /// Emails of the board users working on this task.
    #[serde(default)]
    pub assigned_users: BTreeSet<String>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,

    /// Derived from the column's done flag, see `completion`.
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn subtask_progress(&self) -> SubtaskProgress {
        SubtaskProgress {
            completed: self.subtasks.iter().filter(|s| s.completed).count(),
            total: self.subtasks.len(),
        }
    }

    /// Past its deadline and still open.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.deadline.is_some_and(|d| d < today)
    }

    pub fn is_assigned(&self, email: &str) -> bool {
        self.assigned_users.iter().any(|e| same_name(e, email))
    }
}

/// Input for creating a task. The store assigns `board_id`, `position` and
/// `completed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Target column; the board's first column when absent.
    pub status: Option<String>,
    pub priority: Priority,
    pub subtasks: Vec<Subtask>,
    pub assigned_users: BTreeSet<String>,
    pub deadline: Option<NaiveDate>,
}

impl NewTask {
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            id: new_id("task"),
            title: title.into(),
            description: String::new(),
            status: None,
            priority: Priority::default(),
            subtasks: Vec::new(),
            assigned_users: BTreeSet::new(),
            deadline: None,
        }
    }

    pub fn in_column<S: Into<String>>(mut self, column_id: S) -> Self {
        self.status = Some(column_id.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_subtask<S: Into<String>>(mut self, title: S) -> Self {
        self.subtasks.push(Subtask::new(new_id("sub"), title.into()));
        self
    }

    pub fn assigned_to<S: Into<String>>(mut self, email: S) -> Self {
        self.assigned_users.insert(email.into());
        self
    }
}

/// Partial edit of a task. `None` leaves a field untouched; `deadline:
/// Some(None)` clears the deadline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<Priority>,
    pub subtasks: Option<Vec<Subtask>>,
    pub assigned_users: Option<BTreeSet<String>>,
    pub deadline: Option<Option<NaiveDate>>,
    pub completed: Option<bool>,
}
