//! Board entity - top-level container of columns, tasks and users.

use crate::models::{column::Column, same_name, user::User};

use serde::{Deserialize, Serialize};

pub const DEFAULT_TODO_NAME: &str = "To Do";
pub const DEFAULT_PROGRESS_NAME: &str = "Progress";
pub const DEFAULT_DONE_NAME: &str = "Done";

/// A board owns its ordered columns and its user list. Tasks live in a flat
/// collection next to the boards and point back via `board_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl Board {
    /// Create a board with the three default columns and no users.
    pub fn new(id: String, name: String) -> Self {
        let columns = Self::default_columns(&id);
        Self {
            id,
            name,
            columns,
            users: Vec::new(),
        }
    }

    /// To Do, Progress and Done, with Done as the initial done column.
    pub fn default_columns(board_id: &str) -> Vec<Column> {
        vec![
            Column::new(
                format!("col-{board_id}-todo"),
                DEFAULT_TODO_NAME.to_string(),
                false,
            ),
            Column::new(
                format!("col-{board_id}-progress"),
                DEFAULT_PROGRESS_NAME.to_string(),
                false,
            ),
            Column::new(
                format!("col-{board_id}-done"),
                DEFAULT_DONE_NAME.to_string(),
                true,
            ),
        ]
    }

    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn column_index(&self, id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == id)
    }

    pub fn done_column(&self) -> Option<&Column> {
        self.columns.iter().find(|c| c.is_done)
    }

    pub fn done_column_count(&self) -> usize {
        self.columns.iter().filter(|c| c.is_done).count()
    }

    pub fn user(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| same_name(&u.email, email))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardPatch {
    pub name: Option<String>,
}
