//! Column lifecycle: creation, rename, bulk reorder and deletion with task
//! migration. No path ever leaves a board with more than one done column.

use crate::completion::derive_completed;
use crate::guard::{GuardReason, Guarded};
use crate::models::column::{Column, ColumnPatch};
use crate::models::same_name;
use crate::store::renormalize::renormalize_board;
use crate::store::{BoardState, BoardStore};
use crate::{CoreError, CoreResult};

use std::collections::BTreeSet;
use std::panic::Location;

use error_location::ErrorLocation;
use log::info;

impl BoardStore {
    /// Append a column. It becomes the done column only when the board has
    /// none yet.
    pub fn add_column(
        &self,
        state: &BoardState,
        board_id: &str,
        column_id: &str,
        name: &str,
    ) -> CoreResult<BoardState> {
        let board = state.require_board(board_id)?;
        let name = self.limits.name("Column name", name)?;
        if board.columns.iter().any(|c| same_name(&c.name, &name)) {
            return Err(CoreError::duplicate_name("Column", name));
        }
        if board.column(column_id).is_some() {
            return Err(CoreError::validation(format!(
                "column id already in use: {column_id}"
            )));
        }

        let is_done = board.done_column().is_none();
        let mut next = state.clone();
        if let Some(board) = next.boards.iter_mut().find(|b| b.id == board_id) {
            board
                .columns
                .push(Column::new(column_id.to_string(), name, is_done));
        }
        info!("Column {column_id} added to board {board_id} (done: {is_done})");
        Ok(next)
    }

    /// Rename a column; the name must stay unique among the board's other
    /// columns.
    pub fn update_column(
        &self,
        state: &BoardState,
        board_id: &str,
        column_id: &str,
        patch: &ColumnPatch,
    ) -> CoreResult<BoardState> {
        let board = state.require_board(board_id)?;
        state.require_column(board_id, column_id)?;
        let mut next = state.clone();

        if let Some(name) = &patch.name {
            let name = self.limits.name("Column name", name)?;
            if board
                .columns
                .iter()
                .any(|c| c.id != column_id && same_name(&c.name, &name))
            {
                return Err(CoreError::duplicate_name("Column", name));
            }
            if let Some(column) = next
                .boards
                .iter_mut()
                .find(|b| b.id == board_id)
                .and_then(|b| b.columns.iter_mut().find(|c| c.id == column_id))
            {
                column.name = name;
            }
        }

        Ok(next)
    }

    /// Replace the column order with `columns` (the same columns, new order).
    /// Without a done column the last one becomes done; with several, the
    /// first flagged one wins. Tasks are renumbered afterwards.
    pub fn reorder_columns(
        &self,
        state: &BoardState,
        board_id: &str,
        mut columns: Vec<Column>,
    ) -> CoreResult<BoardState> {
        let board = state.require_board(board_id)?;

        let current: BTreeSet<&str> = board.columns.iter().map(|c| c.id.as_str()).collect();
        let proposed: BTreeSet<&str> = columns.iter().map(|c| c.id.as_str()).collect();
        if current != proposed || columns.len() != board.columns.len() {
            return Err(CoreError::validation(format!(
                "reordered columns do not match the columns of board {board_id}"
            )));
        }

        let mut seen_done = false;
        for column in columns.iter_mut() {
            if column.is_done && seen_done {
                column.is_done = false;
            }
            seen_done |= column.is_done;
        }
        if !seen_done && let Some(last) = columns.last_mut() {
            info!("Board {board_id} lost its done column; {} is now done", last.id);
            last.is_done = true;
        }

        let mut next = state.clone();
        if let Some(target) = next.boards.iter_mut().find(|b| b.id == board_id) {
            target.columns = columns;
        }
        if let Some(board) = next.boards.iter().find(|b| b.id == board_id) {
            renormalize_board(board, &mut next.tasks);
        }
        Ok(next)
    }

    /// Delete a column, moving its tasks to the end of `target_column_id`.
    ///
    /// The last column of a board cannot be deleted: that is reported as a
    /// `Rejected` outcome. If the deleted column was the done column, the new
    /// first column takes over before tasks are migrated.
    pub fn delete_column(
        &self,
        state: &BoardState,
        board_id: &str,
        column_id: &str,
        target_column_id: Option<&str>,
    ) -> CoreResult<Guarded<BoardState>> {
        let board = state.require_board(board_id)?;
        let removed = state.require_column(board_id, column_id)?;

        if board.columns.len() <= 1 {
            return Ok(Guarded::Rejected(GuardReason::LastColumn));
        }

        let orphans: Vec<String> = state
            .column_tasks(board_id, column_id)
            .into_iter()
            .map(|t| t.id.clone())
            .collect();

        let target_id = match target_column_id {
            Some(target) if target == column_id || board.column(target).is_none() => {
                return Err(CoreError::column_not_found(target));
            }
            Some(target) => Some(target.to_string()),
            None if !orphans.is_empty() => {
                return Err(CoreError::MigrationTargetRequired {
                    column_id: column_id.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            None => None,
        };

        let mut next = state.clone();
        let Some(board) = next.boards.iter_mut().find(|b| b.id == board_id) else {
            return Err(CoreError::board_not_found(board_id));
        };
        board.columns.retain(|c| c.id != column_id);
        let mut new_done = None;
        if removed.is_done && let Some(first) = board.columns.first_mut() {
            first.is_done = true;
            new_done = Some(first.clone());
            info!("Done column {column_id} deleted; {} is now done", first.id);
        }

        if let Some(target_id) = target_id {
            let target = board
                .column(&target_id)
                .cloned()
                .ok_or_else(|| CoreError::column_not_found(&target_id))?;
            let base = state.group_size(board_id, &target_id);

            for (offset, task_id) in orphans.iter().enumerate() {
                if let Some(task) = next.tasks.iter_mut().find(|t| &t.id == task_id) {
                    task.status = target_id.clone();
                    task.position = (base + offset) as u32;
                    task.completed = derive_completed(&target, task.completed);
                }
            }
            info!(
                "Column {column_id} deleted; {} task(s) moved to {target_id}",
                orphans.len()
            );
        }

        if let Some(done) = new_done {
            for task in next
                .tasks
                .iter_mut()
                .filter(|t| t.board_id == board_id && t.status == done.id)
            {
                task.completed = derive_completed(&done, task.completed);
            }
        }

        Ok(Guarded::Accepted(next))
    }
}
