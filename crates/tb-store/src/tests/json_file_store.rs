use crate::{JsonFileStore, StoreError};

use std::fs;

use googletest::prelude::*;
use serde_json::json;
use tb_core::{BoardSession, DragReconciler, KeyValueStore, Limits};
use tempfile::TempDir;

#[test]
fn given_missing_directory_when_opened_then_created() {
    // Given
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("nested").join("data");

    // When
    let store = JsonFileStore::open(&dir).unwrap();

    // Then
    assert_that!(store.dir().is_dir(), eq(true));
}

#[test]
fn given_no_file_when_loading_then_fallback_returned() {
    let temp = TempDir::new().unwrap();
    let store = JsonFileStore::open(temp.path()).unwrap();

    let value = store.load("boards", json!([]));

    assert_that!(value, eq(&json!([])));
}

#[test]
fn given_saved_value_when_loaded_then_same_json() {
    // Given
    let temp = TempDir::new().unwrap();
    let mut store = JsonFileStore::open(temp.path()).unwrap();
    let value = json!([{"id": "b1", "name": "Sprint"}]);

    // When
    store.save("boards", &value).unwrap();

    // Then
    assert_that!(store.load("boards", json!(null)), eq(&value));
    let on_disk = fs::read_to_string(temp.path().join("boards.json")).unwrap();
    assert_that!(on_disk.contains("\n  "), eq(true));
}

#[test]
fn given_corrupt_file_when_loading_then_fallback_returned() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("tasks.json"), "{ not json").unwrap();
    let store = JsonFileStore::open(temp.path()).unwrap();

    let value = store.load("tasks", json!("fallback"));

    assert_that!(value, eq(&json!("fallback")));
}

#[test]
fn given_key_with_path_separator_when_saving_then_invalid_key() {
    let temp = TempDir::new().unwrap();
    let mut store = JsonFileStore::open(temp.path()).unwrap();

    let result = store.save("../escape", &json!(1));

    assert!(matches!(result, Err(StoreError::InvalidKey { .. })));
}

#[test]
fn given_session_over_file_store_when_reopened_then_changes_survive() {
    // Given
    let temp = TempDir::new().unwrap();
    let store = JsonFileStore::open(temp.path()).unwrap();
    let mut session = BoardSession::open(store, Limits::default(), DragReconciler::default());
    let id = session.add_board("Persisted").unwrap();
    session.add_column("Review").unwrap();

    // When
    let store = JsonFileStore::open(temp.path()).unwrap();
    let reopened = BoardSession::open(store, Limits::default(), DragReconciler::default());

    // Then
    assert_that!(reopened.active_board_id(), some(eq(id.as_str())));
    assert_that!(reopened.columns().len(), eq(4));
    assert_that!(temp.path().join("currentBoard.json").is_file(), eq(true));
}
