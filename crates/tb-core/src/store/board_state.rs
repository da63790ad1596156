use crate::models::{board::Board, column::Column, task::Task};
use crate::{CoreError, CoreResult};

use serde::{Deserialize, Serialize};

/// Immutable snapshot of every board and every task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    pub boards: Vec<Board>,
    pub tasks: Vec<Task>,
}

impl BoardState {
    pub fn new(boards: Vec<Board>, tasks: Vec<Task>) -> Self {
        Self { boards, tasks }
    }

    pub fn board(&self, id: &str) -> Option<&Board> {
        self.boards.iter().find(|b| b.id == id)
    }

    #[track_caller]
    pub fn require_board(&self, id: &str) -> CoreResult<&Board> {
        self.board(id).ok_or_else(|| CoreError::board_not_found(id))
    }

    #[track_caller]
    pub fn require_column(&self, board_id: &str, column_id: &str) -> CoreResult<&Column> {
        self.require_board(board_id)?
            .column(column_id)
            .ok_or_else(|| CoreError::column_not_found(column_id))
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Task `id`, provided it belongs to `board_id`.
    #[track_caller]
    pub fn require_task(&self, board_id: &str, id: &str) -> CoreResult<&Task> {
        self.task(id)
            .filter(|t| t.board_id == board_id)
            .ok_or_else(|| CoreError::task_not_found(id))
    }

    /// The board's tasks ordered by position. Ties keep storage order.
    pub fn board_tasks(&self, board_id: &str) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| t.board_id == board_id)
            .collect();
        tasks.sort_by_key(|t| t.position);
        tasks
    }

    /// One (board, column) group ordered by position.
    pub fn column_tasks(&self, board_id: &str, column_id: &str) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| t.board_id == board_id && t.status == column_id)
            .collect();
        tasks.sort_by_key(|t| t.position);
        tasks
    }

    pub fn group_size(&self, board_id: &str, column_id: &str) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.board_id == board_id && t.status == column_id)
            .count()
    }
}
