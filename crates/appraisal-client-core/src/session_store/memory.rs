use std::{collections::HashMap, sync::Mutex};

use appraisal_shared::errors::StorageError;

use super::StorageBackend;

/// Storage that lives as long as the process
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().expect("mutex poisoned").get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .lock()
            .expect("mutex poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.lock().expect("mutex poisoned").remove(key);
        Ok(())
    }
}
