use crate::tests::{BOARD, sprint_board, task, today, todo};
use crate::{CoreError, NewTask};

use googletest::prelude::*;

#[test]
fn given_user_when_added_twice_in_other_case_then_duplicate_user() {
    // Given
    let (store, state) = sprint_board();
    let state = store.add_user(&state, BOARD, "u1", "ada@example.com").unwrap();

    // When
    let result = store.add_user(&state, BOARD, "u2", "ADA@example.com");

    // Then
    assert!(matches!(result, Err(CoreError::DuplicateUser { .. })));
}

#[test]
fn given_assigned_user_when_removed_then_unassigned_everywhere_on_board() {
    // Given
    let (store, state) = sprint_board();
    let state = store.add_user(&state, BOARD, "u1", "ada@example.com").unwrap();
    let state = store.add_user(&state, BOARD, "u2", "bob@example.com").unwrap();
    let mut ids = Vec::new();
    let mut state = state;
    for title in ["One", "Two"] {
        let new = NewTask::new(title)
            .in_column(todo(BOARD))
            .assigned_to("ada@example.com")
            .assigned_to("bob@example.com");
        ids.push(new.id.clone());
        state = store
            .add_task(&state, BOARD, new, today())
            .unwrap()
            .accepted()
            .unwrap();
    }
    assert_that!(state.assigned_task_count(BOARD, "ada@example.com"), eq(2));

    // When
    let state = store.remove_user(&state, BOARD, "Ada@Example.com").unwrap();

    // Then
    assert_that!(state.board(BOARD).unwrap().users.len(), eq(1));
    assert_that!(state.assigned_task_count(BOARD, "ada@example.com"), eq(0));
    for id in &ids {
        assert_that!(task(&state, id).is_assigned("bob@example.com"), eq(true));
    }
}

#[test]
fn given_unknown_user_when_removed_then_user_not_found() {
    let (store, state) = sprint_board();

    let result = store.remove_user(&state, BOARD, "nobody@example.com");

    assert!(matches!(result, Err(CoreError::UserNotFound { .. })));
}

#[test]
fn given_blank_email_when_adding_user_then_empty_field() {
    let (store, state) = sprint_board();

    let result = store.add_user(&state, BOARD, "u1", " ");

    assert!(matches!(result, Err(CoreError::EmptyField { .. })));
}
