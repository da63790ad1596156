use crate::completion::derive_completed;
use crate::drag::reconciler::DragOutcome;
use crate::drag::subject::DragSubject;
use crate::drag::target::DropTarget;
use crate::models::task::Task;
use crate::store::{BoardState, BoardStore, TaskMove};
use crate::CoreResult;

use log::debug;

/// Move the element at `from` so it ends up at index `to`.
pub(crate) fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

/// Compute and commit the state a drop produces. Unresolvable drops cancel.
pub(crate) fn reconcile(
    store: &BoardStore,
    state: &BoardState,
    board_id: &str,
    subject: &DragSubject,
    over_id: Option<&str>,
) -> CoreResult<DragOutcome> {
    let Some(target) = over_id.and_then(|id| DropTarget::resolve(state, board_id, id)) else {
        return Ok(DragOutcome::Cancelled);
    };

    match subject {
        DragSubject::Column { id } => reorder_column(store, state, board_id, id, &target),
        DragSubject::Task { id } => move_task(store, state, board_id, id, &target),
    }
}

fn reorder_column(
    store: &BoardStore,
    state: &BoardState,
    board_id: &str,
    active_id: &str,
    target: &DropTarget,
) -> CoreResult<DragOutcome> {
    let over_column = match target {
        DropTarget::Column(id) | DropTarget::ColumnArea(id) => id,
        DropTarget::Task(_) => return Ok(DragOutcome::Cancelled),
    };
    if over_column == active_id {
        return Ok(DragOutcome::Cancelled);
    }

    let board = state.require_board(board_id)?;
    let (Some(from), Some(to)) = (board.column_index(active_id), board.column_index(over_column))
    else {
        return Ok(DragOutcome::Cancelled);
    };

    let mut columns = board.columns.clone();
    array_move(&mut columns, from, to);
    debug!("Column {active_id} moved from index {from} to {to}");

    let next = store.reorder_columns(state, board_id, columns)?;
    Ok(DragOutcome::Committed(next))
}

fn move_task(
    store: &BoardStore,
    state: &BoardState,
    board_id: &str,
    active_id: &str,
    target: &DropTarget,
) -> CoreResult<DragOutcome> {
    let Some(active) = state.task(active_id).filter(|t| t.board_id == board_id) else {
        return Ok(DragOutcome::Cancelled);
    };
    let board = state.require_board(board_id)?;

    let mut groups: Vec<(String, Vec<Task>)> = board
        .columns
        .iter()
        .map(|c| {
            let tasks = state
                .column_tasks(board_id, &c.id)
                .into_iter()
                .cloned()
                .collect();
            (c.id.clone(), tasks)
        })
        .collect();

    let Some(destination) = target.column_id(state).map(str::to_string) else {
        return Ok(DragOutcome::Cancelled);
    };
    let Some(dest_column) = board.column(&destination) else {
        return Ok(DragOutcome::Cancelled);
    };

    let group_of = |groups: &Vec<(String, Vec<Task>)>, column: &str| {
        groups.iter().position(|(id, _)| id == column)
    };
    let (Some(source_index), Some(dest_index)) = (
        group_of(&groups, &active.status),
        group_of(&groups, &destination),
    ) else {
        return Ok(DragOutcome::Cancelled);
    };

    match target {
        DropTarget::Task(over_id) if source_index == dest_index => {
            let group = &mut groups[dest_index].1;
            let (Some(from), Some(to)) = (
                group.iter().position(|t| t.id == active_id),
                group.iter().position(|t| &t.id == over_id),
            ) else {
                return Ok(DragOutcome::Cancelled);
            };
            array_move(group, from, to);
        }
        _ => {
            let source = &mut groups[source_index].1;
            let Some(from) = source.iter().position(|t| t.id == active_id) else {
                return Ok(DragOutcome::Cancelled);
            };
            let mut moved = source.remove(from);
            moved.status = destination.clone();
            moved.completed = derive_completed(dest_column, moved.completed);

            let group = &mut groups[dest_index].1;
            let insert_at = match target {
                DropTarget::Task(over_id) => group
                    .iter()
                    .position(|t| &t.id == over_id)
                    .unwrap_or(group.len()),
                DropTarget::Column(_) | DropTarget::ColumnArea(_) => group.len(),
            };
            group.insert(insert_at, moved);
        }
    }

    let replacement: Vec<Task> = groups
        .into_iter()
        .flat_map(|(_, tasks)| {
            tasks.into_iter().enumerate().map(|(rank, mut task)| {
                task.position = rank as u32;
                task
            })
        })
        .collect();
    debug!("Task {active_id} dropped into column {destination}");

    let next = store.move_tasks(state, board_id, TaskMove::Replace(replacement))?;
    Ok(DragOutcome::Committed(next))
}
