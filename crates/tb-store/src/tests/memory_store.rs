use crate::{MemoryStore, StoreError};

use googletest::prelude::*;
use serde_json::json;
use tb_core::KeyValueStore;

#[test]
fn given_empty_store_when_loading_then_fallback_returned() {
    let store = MemoryStore::new();

    assert_that!(store.load("tasks", json!([])), eq(&json!([])));
}

#[test]
fn given_saved_values_then_keys_listed_in_order() {
    // Given
    let mut store = MemoryStore::new();

    // When
    store.save("tasks", &json!([])).unwrap();
    store.save("boards", &json!([])).unwrap();

    // Then
    let keys: Vec<&str> = store.keys().collect();
    assert_eq!(keys, vec!["boards", "tasks"]);
    assert_that!(store.get("boards"), some(eq(&json!([]))));
}

#[test]
fn given_blank_key_when_saving_then_invalid_key() {
    let mut store = MemoryStore::new();

    let result = store.save("", &json!(null));

    assert!(matches!(result, Err(StoreError::InvalidKey { .. })));
}
