//! In-memory state store.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::store_traits::StateStoreTrait;
use crate::errors::Result;

/// Volatile state store. Useful in tests and for ephemeral sessions.
#[derive(Default)]
pub struct MemoryStateStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateStoreTrait for MemoryStateStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.read().unwrap().get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        self.items.write().unwrap().remove(key);
        Ok(())
    }
}
