//! Completion derivation.
//!
//! A task sitting in the done column is always complete. Leaving the done
//! column keeps whatever flag the task already had: once a task is complete
//! it stays complete until the user unchecks it.

use crate::models::{column::Column, task::Task};

/// Effective completed flag for a task carrying `task_completed` that is
/// placed in `column`.
pub fn derive_completed(column: &Column, task_completed: bool) -> bool {
    column.is_done || task_completed
}

pub fn completed(task: &Task, column: &Column) -> bool {
    derive_completed(column, task.completed)
}
