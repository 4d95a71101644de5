use crate::{Error, LocalStorage};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

///
/// Volatile storage. Content is lost when the value is dropped.
///
#[derive(Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocalStorage for MemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        let items = self.items.lock().await;

        Ok(items.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), Error> {
        let mut items = self.items.lock().await;
        items.insert(key.to_string(), value);

        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), Error> {
        let mut items = self.items.lock().await;
        items.remove(key);

        Ok(())
    }
}
