use std::collections::HashMap;
use std::io;

use serde_json::Value;
use tb_core::KeyValueStore;

/// In-memory adapter that remembers the order of every write and can be
/// told to fail them.
#[derive(Debug, Default)]
pub struct RecordingStore {
    pub values: HashMap<String, Value>,
    pub writes: Vec<String>,
    pub fail_writes: bool,
}

impl RecordingStore {
    pub fn with(entries: &[(&str, Value)]) -> Self {
        Self {
            values: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            ..Self::default()
        }
    }
}

impl KeyValueStore for RecordingStore {
    type Error = io::Error;

    fn load(&self, key: &str, fallback: Value) -> Value {
        self.values.get(key).cloned().unwrap_or(fallback)
    }

    fn save(&mut self, key: &str, value: &Value) -> Result<(), Self::Error> {
        self.writes.push(key.to_string());
        if self.fail_writes {
            return Err(io::Error::other("disk full"));
        }
        self.values.insert(key.to_string(), value.clone());
        Ok(())
    }
}
