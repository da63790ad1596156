use crate::models::column::column_id_from_droppable;
use crate::store::BoardState;

/// A resolved drop target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// The column element itself.
    Column(String),
    /// The empty area below a column's tasks (`<columnId>-droppable`).
    ColumnArea(String),
    Task(String),
}

impl DropTarget {
    /// Classify a drop-region id against the board. Unknown ids yield `None`.
    pub fn resolve(state: &BoardState, board_id: &str, over_id: &str) -> Option<Self> {
        let board = state.board(board_id)?;
        if board.column(over_id).is_some() {
            return Some(Self::Column(over_id.to_string()));
        }
        if let Some(column_id) = column_id_from_droppable(over_id)
            && board.column(column_id).is_some()
        {
            return Some(Self::ColumnArea(column_id.to_string()));
        }
        state
            .task(over_id)
            .filter(|t| t.board_id == board_id)
            .map(|t| Self::Task(t.id.clone()))
    }

    /// Column the target belongs to.
    pub fn column_id<'a>(&'a self, state: &'a BoardState) -> Option<&'a str> {
        match self {
            Self::Column(id) | Self::ColumnArea(id) => Some(id),
            Self::Task(id) => state.task(id).map(|t| t.status.as_str()),
        }
    }
}
