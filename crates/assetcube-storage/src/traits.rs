//! Storage abstraction trait
//!
//! This module defines the ObjectStorage trait that all storage backends must
//! implement, so the upload pipeline can run against S3, the local filesystem,
//! or memory without coupling to implementation details.

use assetcube_core::StorageBackend;
use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    PutFailed(String),

    #[error("Download failed: {0}")]
    GetFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// **Key format:** keys are user-scoped `{username}/{filename}`; see the crate
/// root documentation and the `keys` module.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Write an object at the given key, overwriting any existing object
    /// (upsert semantics). Returns the backend's public URL for the object.
    async fn put(&self, key: &str, content_type: &str, data: Vec<u8>) -> StorageResult<String>;

    /// Read an object's bytes by key.
    async fn get(&self, key: &str) -> StorageResult<Vec<u8>>;

    /// Check whether an object exists at the given key. One round trip; this
    /// is the probe the collision resolver issues per candidate name.
    async fn exists(&self, key: &str) -> StorageResult<bool>;

    /// Delete an object by key.
    async fn delete(&self, key: &str) -> StorageResult<()>;

    /// The backend's public URL for a key, without touching the backend.
    fn public_url(&self, key: &str) -> String;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
