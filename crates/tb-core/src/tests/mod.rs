mod properties;
mod users;

use crate::{BoardState, BoardStore, Guarded, NewTask, Task};

use chrono::NaiveDate;

pub(crate) const BOARD: &str = "b1";

pub(crate) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
}

pub(crate) fn todo(board_id: &str) -> String {
    format!("col-{board_id}-todo")
}

pub(crate) fn progress(board_id: &str) -> String {
    format!("col-{board_id}-progress")
}

pub(crate) fn done(board_id: &str) -> String {
    format!("col-{board_id}-done")
}

/// A store plus a state holding one default board named "Sprint 1".
pub(crate) fn sprint_board() -> (BoardStore, BoardState) {
    let store = BoardStore::default();
    let state = store
        .add_board(&BoardState::default(), BOARD, "Sprint 1")
        .unwrap();
    (store, state)
}

pub(crate) fn with_task(
    store: &BoardStore,
    state: &BoardState,
    id: &str,
    title: &str,
    column: &str,
) -> BoardState {
    let mut new = NewTask::new(title).in_column(column);
    new.id = id.to_string();
    match store.add_task(state, BOARD, new, today()).unwrap() {
        Guarded::Accepted(next) => next,
        Guarded::Rejected(reason) => panic!("task {title} rejected: {reason}"),
    }
}

/// Titles of a column in display order, with their positions.
pub(crate) fn column_order(state: &BoardState, column: &str) -> Vec<(String, u32)> {
    state
        .column_tasks(BOARD, column)
        .into_iter()
        .map(|t| (t.title.clone(), t.position))
        .collect()
}

pub(crate) fn task<'a>(state: &'a BoardState, id: &str) -> &'a Task {
    state.task(id).unwrap()
}
