use crate::tests::{BOARD, sprint_board, today};
use crate::{BoardState, BoardStore, DragOutcome, DragReconciler, Guarded, NewTask, TaskMove};

use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Landing {
    Column(usize),
    Area(usize),
    Task(usize),
}

#[derive(Debug, Clone)]
enum Op {
    AddTask(usize),
    AddColumn,
    DeleteColumn { column: usize, target: usize },
    DragTask { task: usize, drop: Landing },
    DragColumn { column: usize, over: usize },
    ToFront(usize),
}

fn drop_strategy() -> impl Strategy<Value = Landing> {
    prop_oneof![
        (0..6usize).prop_map(Landing::Column),
        (0..6usize).prop_map(Landing::Area),
        (0..20usize).prop_map(Landing::Task),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..6usize).prop_map(Op::AddTask),
        1 => Just(Op::AddColumn),
        1 => (0..6usize, 0..6usize)
            .prop_map(|(column, target)| Op::DeleteColumn { column, target }),
        4 => (0..20usize, drop_strategy()).prop_map(|(task, drop)| Op::DragTask { task, drop }),
        1 => (0..6usize, 0..6usize).prop_map(|(column, over)| Op::DragColumn { column, over }),
        1 => (0..20usize).prop_map(Op::ToFront),
    ]
}

fn column_id(state: &BoardState, index: usize) -> Option<String> {
    let columns = &state.board(BOARD)?.columns;
    columns.get(index % columns.len().max(1)).map(|c| c.id.clone())
}

fn task_id(state: &BoardState, index: usize) -> Option<String> {
    let tasks = state.board_tasks(BOARD);
    tasks.get(index % tasks.len().max(1)).map(|t| t.id.clone())
}

fn drag(store: &BoardStore, state: &BoardState, active: &str, over: &str) -> BoardState {
    let mut reconciler = DragReconciler::default();
    reconciler.start(state, BOARD, active);
    reconciler.set_over(Some(over));
    match reconciler.end(store, state, BOARD) {
        Ok(DragOutcome::Committed(next)) => next,
        _ => state.clone(),
    }
}

fn apply(store: &BoardStore, state: BoardState, op: &Op, serial: usize) -> BoardState {
    match op {
        Op::AddTask(column) => {
            let Some(column) = column_id(&state, *column) else {
                return state;
            };
            let new = NewTask::new(format!("Task {serial}")).in_column(column);
            match store.add_task(&state, BOARD, new, today()) {
                Ok(Guarded::Accepted(next)) => next,
                _ => state,
            }
        }
        Op::AddColumn => store
            .add_column(&state, BOARD, &format!("c{serial}"), &format!("Column {serial}"))
            .unwrap_or(state),
        Op::DeleteColumn { column, target } => {
            let (Some(column), Some(target)) = (column_id(&state, *column), column_id(&state, *target))
            else {
                return state;
            };
            match store.delete_column(&state, BOARD, &column, Some(&target)) {
                Ok(Guarded::Accepted(next)) => next,
                _ => state,
            }
        }
        Op::DragTask { task, drop } => {
            let Some(active) = task_id(&state, *task) else {
                return state;
            };
            let over = match drop {
                Landing::Column(i) => column_id(&state, *i),
                Landing::Area(i) => column_id(&state, *i).map(|c| format!("{c}-droppable")),
                Landing::Task(i) => task_id(&state, *i),
            };
            match over {
                Some(over) => drag(store, &state, &active, &over),
                None => state,
            }
        }
        Op::DragColumn { column, over } => {
            match (column_id(&state, *column), column_id(&state, *over)) {
                (Some(active), Some(over)) => drag(store, &state, &active, &over),
                _ => state,
            }
        }
        Op::ToFront(task) => {
            let Some(id) = task_id(&state, *task) else {
                return state;
            };
            store
                .move_tasks(&state, BOARD, TaskMove::ToFront(id))
                .unwrap_or(state)
        }
    }
}

fn check_invariants(state: &BoardState) -> std::result::Result<(), TestCaseError> {
    let board = state.board(BOARD).unwrap();
    prop_assert!(!board.columns.is_empty());
    prop_assert_eq!(board.done_column_count(), 1);

    for column in &board.columns {
        let group = state.column_tasks(BOARD, &column.id);
        let positions: Vec<u32> = group.iter().map(|t| t.position).collect();
        let expected: Vec<u32> = (0..group.len() as u32).collect();
        prop_assert_eq!(positions, expected, "positions of {}", column.id);
        if column.is_done {
            prop_assert!(group.iter().all(|t| t.completed));
        }
    }
    for task in state.board_tasks(BOARD) {
        prop_assert!(board.column(&task.status).is_some());
    }
    Ok(())
}

// =========================================================================
// Property-Based Tests - board invariants under arbitrary edits
// =========================================================================

proptest! {
    #[test]
    fn given_random_edits_when_applied_then_board_invariants_hold(
        ops in prop::collection::vec(op_strategy(), 1..40)
    ) {
        let (store, mut state) = sprint_board();
        for (serial, op) in ops.iter().enumerate() {
            state = apply(&store, state, op, serial);
            check_invariants(&state)?;
        }
    }

    #[test]
    fn given_random_edits_then_completion_is_sticky(
        ops in prop::collection::vec(op_strategy(), 1..40)
    ) {
        let (store, mut state) = sprint_board();
        for (serial, op) in ops.iter().enumerate() {
            let before = state.clone();
            state = apply(&store, state, op, serial);
            for task in before.tasks.iter().filter(|t| t.completed) {
                if let Some(after) = state.task(&task.id) {
                    prop_assert!(after.completed, "task {} lost completion", task.id);
                }
            }
        }
    }
}
