//! Persistence Adapter contract.
//!
//! The core only ever reads and writes three keys, each holding plain JSON.
//! Writes are not atomic across keys.

use serde_json::Value;

pub const BOARDS_KEY: &str = "boards";
pub const TASKS_KEY: &str = "tasks";
pub const CURRENT_BOARD_KEY: &str = "currentBoard";

/// Generic key to JSON value store.
pub trait KeyValueStore {
    type Error: std::error::Error;

    /// Value stored under `key`, or `fallback` when there is none or it
    /// cannot be read.
    fn load(&self, key: &str, fallback: Value) -> Value;

    fn save(&mut self, key: &str, value: &Value) -> Result<(), Self::Error>;
}
