//! In-memory storage backend.
//!
//! Stores objects in a process-local map. Used by the integration tests and
//! usable as a throwaway backend for local development (`STORAGE_BACKEND=memory`).

use crate::traits::{ObjectStorage, StorageError, StorageResult};
use assetcube_core::StorageBackend;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Memory storage implementation
#[derive(Clone)]
pub struct MemoryStorage {
    objects: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    bucket: String,
}

impl MemoryStorage {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            objects: Arc::new(Mutex::new(HashMap::new())),
            bucket: bucket.into(),
        }
    }

    /// Check if an object exists (for test assertions)
    pub fn has_object(&self, key: &str) -> bool {
        self.objects.lock().unwrap().contains_key(key)
    }

    /// Get object bytes (for test assertions)
    pub fn object(&self, key: &str) -> Option<Vec<u8>> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    /// Number of stored objects (for test assertions)
    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    fn generate_url(&self, key: &str) -> String {
        format!("https://storage.example/{}/{}", self.bucket, key)
    }
}

#[async_trait]
impl ObjectStorage for MemoryStorage {
    async fn put(&self, key: &str, _content_type: &str, data: Vec<u8>) -> StorageResult<String> {
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), data);
        Ok(self.generate_url(key))
    }

    async fn get(&self, key: &str) -> StorageResult<Vec<u8>> {
        self.objects
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(key.to_string()))
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        Ok(self.objects.lock().unwrap().contains_key(key))
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        self.objects
            .lock()
            .unwrap()
            .remove(key)
            .ok_or_else(|| StorageError::NotFound(key.to_string()))?;
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        self.generate_url(key)
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Memory
    }
}
