use crate::models::board::{Board, BoardPatch};
use crate::models::same_name;
use crate::store::{BoardState, BoardStore};
use crate::{CoreError, CoreResult};

use log::info;

impl BoardStore {
    /// Create a board with the default To Do / Progress / Done columns.
    pub fn add_board(&self, state: &BoardState, id: &str, name: &str) -> CoreResult<BoardState> {
        let name = self.limits.name("Board name", name)?;
        if state.boards.iter().any(|b| same_name(&b.name, &name)) {
            return Err(CoreError::duplicate_name("Board", name));
        }
        if state.board(id).is_some() {
            return Err(CoreError::validation(format!("board id already in use: {id}")));
        }

        let mut next = state.clone();
        next.boards.push(Board::new(id.to_string(), name));
        info!("Board created: {id}");
        Ok(next)
    }

    pub fn update_board(
        &self,
        state: &BoardState,
        id: &str,
        patch: &BoardPatch,
    ) -> CoreResult<BoardState> {
        state.require_board(id)?;
        let mut next = state.clone();

        if let Some(name) = &patch.name {
            let name = self.limits.name("Board name", name)?;
            if state
                .boards
                .iter()
                .any(|b| b.id != id && same_name(&b.name, &name))
            {
                return Err(CoreError::duplicate_name("Board", name));
            }
            if let Some(board) = next.boards.iter_mut().find(|b| b.id == id) {
                board.name = name;
            }
        }

        Ok(next)
    }

    /// Remove a board together with its tasks.
    pub fn delete_board(&self, state: &BoardState, id: &str) -> CoreResult<BoardState> {
        state.require_board(id)?;
        let next = BoardState {
            boards: state.boards.iter().filter(|b| b.id != id).cloned().collect(),
            tasks: state.tasks.iter().filter(|t| t.board_id != id).cloned().collect(),
        };
        info!("Board deleted: {id}");
        Ok(next)
    }
}
