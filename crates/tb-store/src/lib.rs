//! Persistence adapters for the task board.
//!
//! `JsonFileStore` keeps one pretty-printed JSON document per key in a data
//! directory; `MemoryStore` keeps everything in a map and suits tests and
//! throwaway sessions.

mod error;
mod json_file_store;
mod memory_store;

#[cfg(test)]
mod tests;

pub use error::{StoreError, StoreResult};
pub use json_file_store::JsonFileStore;
pub use memory_store::MemoryStore;

/// Keys map to file names, so only a conservative character set is allowed.
pub(crate) fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
