//! Board session: the single source of truth a UI renders from.
//!
//! The session pairs the current snapshot with the active board id and the
//! persistence adapter. Each mutation asks the `BoardStore` for the next
//! snapshot, swaps it in and writes the changed keys through to the adapter
//! in commit order. A failed write is logged and otherwise ignored.

use crate::drag::{Collision, CollisionArgs, DragOutcome, DragReconciler, DragSubject, Point};
use crate::guard::Guarded;
use crate::models::board::{Board, BoardPatch};
use crate::models::column::{Column, ColumnPatch};
use crate::models::new_id;
use crate::models::task::{NewTask, Task, TaskPatch};
use crate::persistence::{BOARDS_KEY, CURRENT_BOARD_KEY, KeyValueStore, TASKS_KEY};
use crate::seed::{seed_boards, seed_tasks};
use crate::store::{BoardState, BoardStore, TaskMove};
use crate::{CoreError, CoreResult, Limits};

use std::panic::Location;
use std::sync::Arc;

use chrono::NaiveDate;
use error_location::ErrorLocation;
use log::{debug, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub struct BoardSession<S: KeyValueStore> {
    adapter: S,
    store: BoardStore,
    state: Arc<BoardState>,
    active: Option<String>,
    drag: DragReconciler,
}

impl<S: KeyValueStore> BoardSession<S> {
    /// Load boards, tasks and the active board from `adapter`. Missing or
    /// unreadable collections are replaced by the sample content.
    pub fn open(adapter: S, limits: Limits, drag: DragReconciler) -> Self {
        let boards = Self::load_or(&adapter, BOARDS_KEY, seed_boards);
        let tasks = Self::load_or(&adapter, TASKS_KEY, seed_tasks);
        let state = BoardState::new(boards, tasks);

        let stored = adapter
            .load(CURRENT_BOARD_KEY, Value::String(String::new()))
            .as_str()
            .map(str::to_string)
            .unwrap_or_default();
        let active = if state.board(&stored).is_some() {
            Some(stored)
        } else {
            state.boards.first().map(|b| b.id.clone())
        };

        info!(
            "Session opened: {} board(s), {} task(s), active board {:?}",
            state.boards.len(),
            state.tasks.len(),
            active
        );

        Self {
            adapter,
            store: BoardStore::new(limits),
            state: Arc::new(state),
            active,
            drag,
        }
    }

    fn load_or<T, F>(adapter: &S, key: &str, seed: F) -> Vec<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> Vec<T>,
    {
        match adapter.load(key, Value::Null) {
            Value::Null => seed(),
            value => serde_json::from_value(value).unwrap_or_else(|e| {
                warn!("Stored {key} could not be decoded, using sample data: {e}");
                seed()
            }),
        }
    }

    // ------------------------------------------------------------------ //
    // Reads
    // ------------------------------------------------------------------ //

    /// Current snapshot. Holding it is safe across later commits.
    pub fn snapshot(&self) -> Arc<BoardState> {
        Arc::clone(&self.state)
    }

    pub fn active_board_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_board(&self) -> Option<&Board> {
        self.active.as_deref().and_then(|id| self.state.board(id))
    }

    pub fn columns(&self) -> &[Column] {
        self.active_board().map(|b| b.columns.as_slice()).unwrap_or(&[])
    }

    /// Active board's tasks ordered by position.
    pub fn tasks(&self) -> Vec<Task> {
        match self.active.as_deref() {
            Some(id) => self.state.board_tasks(id).into_iter().cloned().collect(),
            None => Vec::new(),
        }
    }

    pub fn drag(&self) -> &DragReconciler {
        &self.drag
    }

    pub fn adapter(&self) -> &S {
        &self.adapter
    }

    // ------------------------------------------------------------------ //
    // Boards
    // ------------------------------------------------------------------ //

    /// Create a board and make it active. Returns the new board id.
    pub fn add_board(&mut self, name: &str) -> CoreResult<String> {
        self.ensure_idle()?;
        let id = new_id("board");
        let next = self.store.add_board(&self.state, &id, name)?;
        self.commit(next);
        self.set_active(Some(id.clone()));
        Ok(id)
    }

    pub fn update_board(&mut self, id: &str, patch: &BoardPatch) -> CoreResult<()> {
        self.ensure_idle()?;
        let next = self.store.update_board(&self.state, id, patch)?;
        self.commit(next);
        Ok(())
    }

    /// Delete a board. Deleting the active board selects the first
    /// remaining one.
    pub fn delete_board(&mut self, id: &str) -> CoreResult<()> {
        self.ensure_idle()?;
        let next = self.store.delete_board(&self.state, id)?;
        self.commit(next);
        if self.active.as_deref() == Some(id) {
            let first = self.state.boards.first().map(|b| b.id.clone());
            self.set_active(first);
        }
        Ok(())
    }

    pub fn select_board(&mut self, id: &str) -> CoreResult<()> {
        self.ensure_idle()?;
        self.state.require_board(id)?;
        self.set_active(Some(id.to_string()));
        Ok(())
    }

    /// Make `id` the active board for this session only. The stored current
    /// board is left as it is.
    pub fn focus_board(&mut self, id: &str) -> CoreResult<()> {
        self.ensure_idle()?;
        self.state.require_board(id)?;
        debug!("Board {id} focused for this session");
        self.active = Some(id.to_string());
        Ok(())
    }

    // ------------------------------------------------------------------ //
    // Columns
    // ------------------------------------------------------------------ //

    /// Returns the new column id.
    pub fn add_column(&mut self, name: &str) -> CoreResult<String> {
        let board_id = self.mutable_board()?;
        let id = new_id("col");
        let next = self.store.add_column(&self.state, &board_id, &id, name)?;
        self.commit(next);
        Ok(id)
    }

    pub fn update_column(&mut self, id: &str, patch: &ColumnPatch) -> CoreResult<()> {
        let board_id = self.mutable_board()?;
        let next = self.store.update_column(&self.state, &board_id, id, patch)?;
        self.commit(next);
        Ok(())
    }

    pub fn reorder_columns(&mut self, columns: Vec<Column>) -> CoreResult<()> {
        let board_id = self.mutable_board()?;
        let next = self.store.reorder_columns(&self.state, &board_id, columns)?;
        self.commit(next);
        Ok(())
    }

    pub fn delete_column(&mut self, id: &str, target: Option<&str>) -> CoreResult<Guarded<()>> {
        let board_id = self.mutable_board()?;
        let outcome = self
            .store
            .delete_column(&self.state, &board_id, id, target)?;
        Ok(outcome.map(|next| self.commit(next)))
    }

    // ------------------------------------------------------------------ //
    // Tasks
    // ------------------------------------------------------------------ //

    /// Returns the new task id when accepted.
    pub fn add_task(&mut self, new: NewTask, today: NaiveDate) -> CoreResult<Guarded<String>> {
        let board_id = self.mutable_board()?;
        let id = new.id.clone();
        let outcome = self.store.add_task(&self.state, &board_id, new, today)?;
        Ok(outcome.map(|next| {
            self.commit(next);
            id
        }))
    }

    pub fn update_task(
        &mut self,
        id: &str,
        patch: TaskPatch,
        today: NaiveDate,
    ) -> CoreResult<Guarded<()>> {
        let board_id = self.mutable_board()?;
        let outcome = self
            .store
            .update_task(&self.state, &board_id, id, patch, today)?;
        Ok(outcome.map(|next| self.commit(next)))
    }

    pub fn delete_task(&mut self, id: &str) -> CoreResult<()> {
        let board_id = self.mutable_board()?;
        let next = self.store.delete_task(&self.state, &board_id, id)?;
        self.commit(next);
        Ok(())
    }

    pub fn move_task(&mut self, update: TaskMove) -> CoreResult<()> {
        let board_id = self.mutable_board()?;
        let next = self.store.move_tasks(&self.state, &board_id, update)?;
        self.commit(next);
        Ok(())
    }

    pub fn toggle_subtask(&mut self, task_id: &str, subtask_id: &str) -> CoreResult<()> {
        let board_id = self.mutable_board()?;
        let next = self
            .store
            .toggle_subtask(&self.state, &board_id, task_id, subtask_id)?;
        self.commit(next);
        Ok(())
    }

    // ------------------------------------------------------------------ //
    // Users
    // ------------------------------------------------------------------ //

    pub fn add_user(&mut self, email: &str) -> CoreResult<()> {
        let board_id = self.mutable_board()?;
        let next = self
            .store
            .add_user(&self.state, &board_id, &new_id("user"), email)?;
        self.commit(next);
        Ok(())
    }

    pub fn remove_user(&mut self, email: &str) -> CoreResult<()> {
        let board_id = self.mutable_board()?;
        let next = self.store.remove_user(&self.state, &board_id, email)?;
        self.commit(next);
        Ok(())
    }

    pub fn assigned_task_count(&self, email: &str) -> usize {
        self.active
            .as_deref()
            .map(|id| self.state.assigned_task_count(id, email))
            .unwrap_or(0)
    }

    // ------------------------------------------------------------------ //
    // Drag gestures
    // ------------------------------------------------------------------ //

    pub fn press(&mut self, id: &str, origin: Point) {
        self.drag.press(id, origin);
    }

    pub fn pointer_moved(&mut self, point: Point) -> Option<DragSubject> {
        let board_id = self.active.clone()?;
        self.drag
            .pointer_moved(&self.state, &board_id, point)
            .cloned()
    }

    pub fn begin_drag(&mut self, id: &str) -> Option<DragSubject> {
        let board_id = self.active.clone()?;
        self.drag.start(&self.state, &board_id, id).cloned()
    }

    pub fn hover(&mut self, args: &CollisionArgs<'_>) -> Vec<Collision> {
        let Some(board_id) = self.active.clone() else {
            return Vec::new();
        };
        self.drag.hover(&self.state, &board_id, args)
    }

    pub fn drag_over(&mut self, over_id: Option<&str>) {
        self.drag.set_over(over_id);
    }

    /// Finish the gesture. Returns whether anything was committed.
    pub fn end_drag(&mut self) -> CoreResult<bool> {
        let Some(board_id) = self.active.clone() else {
            self.drag.cancel();
            return Ok(false);
        };
        match self.drag.end(&self.store, &self.state, &board_id)? {
            DragOutcome::Committed(next) => {
                self.commit(next);
                Ok(true)
            }
            DragOutcome::Cancelled => Ok(false),
        }
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    // ------------------------------------------------------------------ //
    // Commit
    // ------------------------------------------------------------------ //

    #[track_caller]
    fn ensure_idle(&self) -> CoreResult<()> {
        if self.drag.is_dragging() {
            return Err(CoreError::GestureInProgress {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    /// Active board id, provided no gesture is running.
    #[track_caller]
    fn mutable_board(&self) -> CoreResult<String> {
        self.ensure_idle()?;
        self.active.clone().ok_or_else(|| CoreError::NoActiveBoard {
            location: ErrorLocation::from(Location::caller()),
        })
    }

    fn commit(&mut self, next: BoardState) {
        let boards_changed = next.boards != self.state.boards;
        let tasks_changed = next.tasks != self.state.tasks;
        self.state = Arc::new(next);
        debug!("Committed: boards changed={boards_changed}, tasks changed={tasks_changed}");

        let state = Arc::clone(&self.state);
        if boards_changed {
            self.persist(BOARDS_KEY, &state.boards);
        }
        if tasks_changed {
            self.persist(TASKS_KEY, &state.tasks);
        }
    }

    fn set_active(&mut self, id: Option<String>) {
        self.active = id;
        let value = self.active.clone().unwrap_or_default();
        self.persist(CURRENT_BOARD_KEY, &value);
    }

    fn persist<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        let json = match serde_json::to_value(value) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to encode {key}: {e}");
                return;
            }
        };
        if let Err(e) = self.adapter.save(key, &json) {
            warn!("Failed to save {key}: {e}");
        }
    }
}
