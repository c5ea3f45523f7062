//! In-memory upload key store for tests and local development.

use crate::keys::{KeyStoreResult, UploadKeyStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Key store holding records in a process-local map.
#[derive(Clone, Default)]
pub struct MemoryUploadKeyStore {
    keys: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryUploadKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a user's upload key.
    pub fn insert(&self, username: &str, upload_key: &str) {
        self.keys
            .lock()
            .unwrap()
            .insert(username.to_string(), upload_key.to_string());
    }
}

#[async_trait]
impl UploadKeyStore for MemoryUploadKeyStore {
    async fn fetch_key(&self, username: &str) -> KeyStoreResult<Option<String>> {
        Ok(self.keys.lock().unwrap().get(username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_key_returns_inserted_value() {
        let store = MemoryUploadKeyStore::new();
        store.insert("alice", "sekrit");

        assert_eq!(
            store.fetch_key("alice").await.unwrap(),
            Some("sekrit".to_string())
        );
        assert_eq!(store.fetch_key("bob").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_insert_overwrites_existing_key() {
        let store = MemoryUploadKeyStore::new();
        store.insert("alice", "old");
        store.insert("alice", "new");

        assert_eq!(
            store.fetch_key("alice").await.unwrap(),
            Some("new".to_string())
        );
    }
}
