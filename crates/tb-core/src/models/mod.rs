pub mod board;
pub mod column;
pub mod priority;
pub mod subtask;
pub mod task;
pub mod user;

use uuid::Uuid;

/// Generate a stable identifier such as `task-6f1c...`.
pub fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

/// Case-insensitive comparison used for every uniqueness rule on a board.
pub(crate) fn same_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
