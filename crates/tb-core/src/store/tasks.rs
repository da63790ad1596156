use crate::completion::derive_completed;
use crate::guard::{GuardReason, Guarded, deadline_allowed};
use crate::models::board::Board;
use crate::models::same_name;
use crate::models::subtask::Subtask;
use crate::models::task::{NewTask, Task, TaskPatch};
use crate::store::renormalize::renormalize_board;
use crate::store::{BoardState, BoardStore};
use crate::{CoreError, CoreResult};

use std::collections::BTreeSet;
use std::panic::Location;

use chrono::NaiveDate;
use error_location::ErrorLocation;
use log::debug;

/// Input of `move_tasks`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskMove {
    /// Put one task at the front of its own column.
    ToFront(String),
    /// Replace the listed tasks of the board, then renumber each column.
    /// Board tasks absent from the list are carried over unchanged.
    Replace(Vec<Task>),
}

impl BoardStore {
    /// Append a task to its column. Fails when the board has no columns or
    /// the title is taken; a past deadline is refused, not an error.
    pub fn add_task(
        &self,
        state: &BoardState,
        board_id: &str,
        new: NewTask,
        today: NaiveDate,
    ) -> CoreResult<Guarded<BoardState>> {
        let board = state.require_board(board_id)?;
        let first_column = board.columns.first().ok_or_else(|| CoreError::NoColumns {
            board_id: board_id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let title = self.limits.title("Task title", &new.title)?;
        self.limits.description(&new.description)?;
        Self::ensure_unique_title(state, board_id, &title, None)?;

        let status = new.status.unwrap_or_else(|| first_column.id.clone());
        let column = state.require_column(board_id, &status)?;
        let subtasks = self.checked_subtasks(new.subtasks)?;
        let assigned_users = Self::checked_assignees(board, new.assigned_users)?;

        if state.task(&new.id).is_some() {
            return Err(CoreError::validation(format!(
                "task id already in use: {}",
                new.id
            )));
        }
        if !deadline_allowed(new.deadline, today) {
            return Ok(Guarded::Rejected(GuardReason::DeadlineInPast));
        }

        let task = Task {
            id: new.id,
            board_id: board_id.to_string(),
            position: state.group_size(board_id, &status) as u32,
            status,
            title,
            description: new.description,
            priority: new.priority,
            subtasks,
            assigned_users,
            deadline: new.deadline,
            completed: column.is_done,
        };
        debug!(
            "Task {} added to column {} at position {}",
            task.id, task.status, task.position
        );

        let mut next = state.clone();
        next.tasks.push(task);
        Ok(Guarded::Accepted(next))
    }

    /// Apply `patch`. `completed` is re-derived from the (possibly new)
    /// column; positions are not renumbered.
    pub fn update_task(
        &self,
        state: &BoardState,
        board_id: &str,
        task_id: &str,
        patch: TaskPatch,
        today: NaiveDate,
    ) -> CoreResult<Guarded<BoardState>> {
        let board = state.require_board(board_id)?;
        let current = state.require_task(board_id, task_id)?;
        let mut task = current.clone();

        if let Some(title) = &patch.title {
            let title = self.limits.title("Task title", title)?;
            Self::ensure_unique_title(state, board_id, &title, Some(task_id))?;
            task.title = title;
        }
        if let Some(description) = patch.description {
            self.limits.description(&description)?;
            task.description = description;
        }
        if let Some(status) = patch.status {
            state.require_column(board_id, &status)?;
            task.status = status;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(subtasks) = patch.subtasks {
            task.subtasks = self.checked_subtasks(subtasks)?;
        }
        if let Some(assigned_users) = patch.assigned_users {
            task.assigned_users = Self::checked_assignees(board, assigned_users)?;
        }
        if let Some(deadline) = patch.deadline {
            if !deadline_allowed(deadline, today) {
                return Ok(Guarded::Rejected(GuardReason::DeadlineInPast));
            }
            task.deadline = deadline;
        }

        let column = state.require_column(board_id, &task.status)?;
        task.completed = derive_completed(column, patch.completed.unwrap_or(task.completed));

        Ok(Guarded::Accepted(Self::replace_task(state, task)))
    }

    /// Remove a task. Remaining positions keep their gap until the next
    /// bulk move.
    pub fn delete_task(
        &self,
        state: &BoardState,
        board_id: &str,
        task_id: &str,
    ) -> CoreResult<BoardState> {
        state.require_task(board_id, task_id)?;
        let mut next = state.clone();
        next.tasks.retain(|t| t.id != task_id);
        Ok(next)
    }

    /// Flip one subtask's completed flag.
    pub fn toggle_subtask(
        &self,
        state: &BoardState,
        board_id: &str,
        task_id: &str,
        subtask_id: &str,
    ) -> CoreResult<BoardState> {
        let mut task = state.require_task(board_id, task_id)?.clone();
        let subtask = task
            .subtasks
            .iter_mut()
            .find(|s| s.id == subtask_id)
            .ok_or_else(|| CoreError::SubtaskNotFound {
                id: subtask_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;
        subtask.completed = !subtask.completed;
        Ok(Self::replace_task(state, task))
    }

    /// Commit a reordering. A full replacement list renumbers every column of
    /// the board, which restores contiguous positions after any drag.
    pub fn move_tasks(
        &self,
        state: &BoardState,
        board_id: &str,
        update: TaskMove,
    ) -> CoreResult<BoardState> {
        let board = state.require_board(board_id)?;

        match update {
            TaskMove::ToFront(task_id) => {
                let task = state.require_task(board_id, &task_id)?;
                let mut next = state.clone();
                for other in next
                    .tasks
                    .iter_mut()
                    .filter(|t| t.board_id == board_id && t.status == task.status)
                {
                    if other.id == task_id {
                        other.position = 0;
                    } else if other.position < task.position {
                        other.position += 1;
                    }
                }
                Ok(next)
            }
            TaskMove::Replace(replacement) => {
                let mut seen = BTreeSet::new();
                for task in &replacement {
                    if task.board_id != board_id {
                        return Err(CoreError::validation(format!(
                            "task {} belongs to board {}, not {board_id}",
                            task.id, task.board_id
                        )));
                    }
                    if board.column(&task.status).is_none() {
                        return Err(CoreError::column_not_found(&task.status));
                    }
                    if !seen.insert(task.id.as_str()) {
                        return Err(CoreError::validation(format!(
                            "task {} appears twice in the move",
                            task.id
                        )));
                    }
                }

                // Board tasks missing from the replacement are kept as they
                // are, including tasks whose column no longer exists.
                let mut tasks: Vec<Task> = state
                    .tasks
                    .iter()
                    .filter(|t| t.board_id != board_id || !seen.contains(t.id.as_str()))
                    .cloned()
                    .collect();
                tasks.extend(replacement);
                renormalize_board(board, &mut tasks);

                debug!("Board {board_id} renormalized after move");
                Ok(BoardState {
                    boards: state.boards.clone(),
                    tasks,
                })
            }
        }
    }

    fn replace_task(state: &BoardState, task: Task) -> BoardState {
        let mut next = state.clone();
        if let Some(slot) = next.tasks.iter_mut().find(|t| t.id == task.id) {
            *slot = task;
        }
        next
    }

    #[track_caller]
    fn ensure_unique_title(
        state: &BoardState,
        board_id: &str,
        title: &str,
        except: Option<&str>,
    ) -> CoreResult<()> {
        let taken = state.tasks.iter().any(|t| {
            t.board_id == board_id && Some(t.id.as_str()) != except && same_name(&t.title, title)
        });
        if taken {
            return Err(CoreError::DuplicateTitle {
                title: title.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    fn checked_subtasks(&self, subtasks: Vec<Subtask>) -> CoreResult<Vec<Subtask>> {
        subtasks
            .into_iter()
            .map(|s| {
                Ok(Subtask {
                    title: self.limits.title("Subtask title", &s.title)?,
                    ..s
                })
            })
            .collect()
    }

    /// Every assignee must be a user of the board.
    fn checked_assignees(board: &Board, emails: BTreeSet<String>) -> CoreResult<BTreeSet<String>> {
        emails
            .into_iter()
            .map(|email| {
                board
                    .user(&email)
                    .map(|u| u.email.clone())
                    .ok_or_else(|| CoreError::UserNotFound {
                        email,
                        location: ErrorLocation::from(Location::caller()),
                    })
            })
            .collect()
    }
}
