use crate::models::same_name;
use crate::models::user::User;
use crate::store::{BoardState, BoardStore};
use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use log::info;

impl BoardStore {
    pub fn add_user(
        &self,
        state: &BoardState,
        board_id: &str,
        user_id: &str,
        email: &str,
    ) -> CoreResult<BoardState> {
        let board = state.require_board(board_id)?;
        let email = self.limits.name("User email", email)?;
        if board.user(&email).is_some() {
            return Err(CoreError::DuplicateUser {
                email,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut next = state.clone();
        if let Some(board) = next.boards.iter_mut().find(|b| b.id == board_id) {
            board.users.push(User::new(user_id.to_string(), email));
        }
        Ok(next)
    }

    /// Remove a user from the board and unassign it from every task of the
    /// board.
    pub fn remove_user(
        &self,
        state: &BoardState,
        board_id: &str,
        email: &str,
    ) -> CoreResult<BoardState> {
        let board = state.require_board(board_id)?;
        if board.user(email).is_none() {
            return Err(CoreError::UserNotFound {
                email: email.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut next = state.clone();
        if let Some(board) = next.boards.iter_mut().find(|b| b.id == board_id) {
            board.users.retain(|u| !same_name(&u.email, email));
        }
        let mut unassigned = 0;
        for task in next.tasks.iter_mut().filter(|t| t.board_id == board_id) {
            let before = task.assigned_users.len();
            task.assigned_users.retain(|e| !same_name(e, email));
            unassigned += before - task.assigned_users.len();
        }
        info!("User {email} removed from board {board_id}; unassigned from {unassigned} task(s)");
        Ok(next)
    }
}

impl BoardState {
    /// Number of the board's tasks assigned to `email`.
    pub fn assigned_task_count(&self, board_id: &str, email: &str) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.board_id == board_id && t.is_assigned(email))
            .count()
    }
}
