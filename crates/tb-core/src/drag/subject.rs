use crate::store::BoardState;

use serde::Serialize;

/// What is being dragged. Decided once when the gesture starts and carried
/// unchanged to the drop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragSubject {
    Column { id: String },
    Task { id: String },
}

impl DragSubject {
    /// Look `id` up among the board's columns first, then its tasks.
    pub fn resolve(state: &BoardState, board_id: &str, id: &str) -> Option<Self> {
        let board = state.board(board_id)?;
        if board.column(id).is_some() {
            return Some(Self::Column { id: id.to_string() });
        }
        state
            .task(id)
            .filter(|t| t.board_id == board_id)
            .map(|t| Self::Task { id: t.id.clone() })
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Column { id } | Self::Task { id } => id,
        }
    }
}
