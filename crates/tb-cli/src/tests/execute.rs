use crate::CliError;
use crate::tests::{session, tb};

use googletest::prelude::*;
use tb_core::CoreError;

#[test]
fn given_fresh_store_when_listing_boards_then_sample_board_is_active() {
    // Given
    let mut session = session();

    // When
    let boards = tb(&mut session, &["board", "list"]).unwrap();

    // Then
    assert_that!(boards[0]["name"].as_str(), some(eq("Getting Started")));
    assert_that!(boards[0]["active"].as_bool(), some(eq(true)));
    assert_that!(boards[0]["columns"].as_u64(), some(eq(3)));
}

#[test]
fn given_new_board_when_adding_task_then_listed_in_first_column() {
    // Given
    let mut session = session();
    tb(&mut session, &["board", "add", "Sprint"]).unwrap();

    // When
    let added = tb(
        &mut session,
        &["task", "add", "Ship", "--priority", "high", "--subtask", "Tag release"],
    )
    .unwrap();
    let tasks = tb(&mut session, &["task", "list"]).unwrap();

    // Then
    let task = &tasks[0];
    assert_that!(task["id"], eq(&added["id"]));
    assert_that!(task["priority"].as_str(), some(eq("high")));
    assert_that!(task["position"].as_u64(), some(eq(0)));
    assert_that!(task["subtaskProgress"]["total"].as_u64(), some(eq(1)));
    assert_that!(task["overdue"].as_bool(), some(eq(false)));
}

#[test]
fn given_past_deadline_when_adding_task_then_rejected() {
    let mut session = session();

    let result = tb(&mut session, &["task", "add", "Late", "--deadline", "2026-03-14"]);

    assert!(matches!(result, Err(CliError::Rejected { .. })));
}

#[test]
fn given_unknown_priority_when_adding_task_then_invalid_priority() {
    let mut session = session();

    let result = tb(&mut session, &["task", "add", "Odd", "--priority", "urgent"]);

    assert!(matches!(
        result,
        Err(CliError::Core(CoreError::InvalidPriority { .. }))
    ));
}

#[test]
fn given_column_moved_to_front_then_first_in_list() {
    // Given
    let mut session = session();
    let done = session.columns()[2].id.clone();

    // When
    tb(&mut session, &["column", "move", &done, "--to", "0"]).unwrap();
    let columns = tb(&mut session, &["column", "list"]).unwrap();

    // Then
    assert_that!(columns[0]["id"].as_str(), some(eq(done.as_str())));
    assert_that!(columns[0]["isDone"].as_bool(), some(eq(true)));
}

#[test]
fn given_task_dragged_to_done_area_then_committed_and_completed() {
    // Given
    let mut session = session();
    tb(&mut session, &["board", "add", "Sprint"]).unwrap();
    let added = tb(&mut session, &["task", "add", "Ship"]).unwrap();
    let id = added["id"].as_str().unwrap().to_string();
    let area = format!("{}-droppable", session.columns()[2].id);

    // When
    let result = tb(&mut session, &["drag", &id, &area]).unwrap();

    // Then
    assert_that!(result["committed"].as_bool(), some(eq(true)));
    assert_that!(result["subject"]["kind"].as_str(), some(eq("task")));
    let tasks = tb(&mut session, &["task", "list"]).unwrap();
    assert_that!(tasks[0]["completed"].as_bool(), some(eq(true)));
}

#[test]
fn given_drag_without_target_then_not_committed() {
    let mut session = session();
    let todo = session.columns()[0].id.clone();

    let result = tb(&mut session, &["drag", &todo]).unwrap();

    assert_that!(result["committed"].as_bool(), some(eq(false)));
}

#[test]
fn given_unknown_drag_subject_then_invalid_argument() {
    let mut session = session();

    let result = tb(&mut session, &["drag", "ghost"]);

    assert!(matches!(result, Err(CliError::InvalidArgument { .. })));
}

#[test]
fn given_board_flag_when_running_then_board_focused_first() {
    // Given
    let mut session = session();
    let created = tb(&mut session, &["board", "add", "Other"]).unwrap();
    let other = created["id"].as_str().unwrap().to_string();
    tb(&mut session, &["board", "select", "board-getting-started"]).unwrap();

    // When
    let columns = tb(&mut session, &["column", "list", "--board", &other]).unwrap();

    // Then
    assert_that!(session.active_board_id(), some(eq(other.as_str())));
    assert_that!(columns.as_array().map(Vec::len), some(eq(3)));
}

#[test]
fn given_user_with_tasks_when_removed_then_unassigned_count_reported() {
    // Given
    let mut session = session();
    tb(&mut session, &["user", "add", "ada@example.com"]).unwrap();
    tb(&mut session, &["task", "add", "Pair", "--assign", "ada@example.com"]).unwrap();

    // When
    let removed = tb(&mut session, &["user", "remove", "ada@example.com"]).unwrap();

    // Then
    assert_that!(removed["unassignedTasks"].as_u64(), some(eq(1)));
}

#[test]
fn given_last_column_when_deleted_then_rejected() {
    // Given
    let mut session = session();
    tb(&mut session, &["board", "add", "Tiny"]).unwrap();
    let ids: Vec<String> = session.columns().iter().map(|c| c.id.clone()).collect();
    tb(&mut session, &["column", "delete", &ids[1]]).unwrap();
    tb(&mut session, &["column", "delete", &ids[2]]).unwrap();

    // When
    let result = tb(&mut session, &["column", "delete", &ids[0]]);

    // Then
    assert!(matches!(result, Err(CliError::Rejected { .. })));
}

#[test]
fn given_board_flag_when_listing_tasks_then_current_board_unchanged() {
    // Given
    let mut session = session();
    let sprint = tb(&mut session, &["board", "add", "Sprint"]).unwrap();
    let sample = "board-getting-started";

    // When
    let tasks = tb(&mut session, &["--board", sample, "task", "list"]).unwrap();

    // Then
    assert_that!(tasks.as_array().map(Vec::len), some(eq(4)));
    assert_that!(session.adapter().get("currentBoard"), some(eq(&sprint["id"])));
}

#[test]
fn given_board_list_then_done_column_and_droppable_ids_reported() {
    // Given
    let mut session = session();

    // When
    let boards = tb(&mut session, &["board", "list"]).unwrap();
    let columns = tb(&mut session, &["column", "list"]).unwrap();

    // Then
    assert_that!(boards[0]["doneColumn"], eq(&columns[2]["id"]));
    let area = format!("{}-droppable", columns[0]["id"].as_str().unwrap());
    assert_that!(columns[0]["droppableId"].as_str(), some(eq(area.as_str())));
}
