use crate::{StoreError, is_valid_key};

use std::collections::BTreeMap;

use serde_json::Value;
use tb_core::KeyValueStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    type Error = StoreError;

    fn load(&self, key: &str, fallback: Value) -> Value {
        self.values.get(key).cloned().unwrap_or(fallback)
    }

    fn save(&mut self, key: &str, value: &Value) -> Result<(), Self::Error> {
        if !is_valid_key(key) {
            return Err(StoreError::invalid_key(key));
        }
        self.values.insert(key.to_string(), value.clone());
        Ok(())
    }
}
