use crate::traits::{ObjectStorage, StorageError, StorageResult};
use assetcube_core::StorageBackend;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage implementation
#[derive(Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
    base_url: String,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Root directory for file storage (e.g., "/var/lib/assetcube/uploads")
    /// * `base_url` - Base URL for serving files (e.g., "http://localhost:4000/files")
    pub async fn new(base_path: impl Into<PathBuf>, base_url: String) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage {
            base_path,
            base_url,
        })
    }

    /// Convert storage key to filesystem path with traversal validation.
    /// Keys come from `keys::object_key`, but the check is repeated here so a
    /// backend handed a raw key still cannot escape the base directory.
    fn key_to_path(&self, key: &str) -> StorageResult<PathBuf> {
        if key.starts_with('/') || Path::new(key).components().any(|c| c.as_os_str() == "..") {
            return Err(StorageError::InvalidKey(
                "Storage key contains invalid characters".to_string(),
            ));
        }

        Ok(self.base_path.join(key))
    }

    /// Generate public URL for file
    fn generate_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), key)
    }

    /// Ensure parent directory exists
    async fn ensure_parent_dir(&self, path: &Path) -> StorageResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl ObjectStorage for LocalStorage {
    async fn put(&self, key: &str, _content_type: &str, data: Vec<u8>) -> StorageResult<String> {
        let path = self.key_to_path(key)?;
        let size = data.len();

        self.ensure_parent_dir(&path).await?;

        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::PutFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(&data).await.map_err(|e| {
            StorageError::PutFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::PutFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage upload successful"
        );

        Ok(self.generate_url(key))
    }

    async fn get(&self, key: &str) -> StorageResult<Vec<u8>> {
        let path = self.key_to_path(key)?;

        match fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(key.to_string()))
            }
            Err(e) => Err(StorageError::GetFailed(format!(
                "Failed to read file {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        let path = self.key_to_path(key)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        let path = self.key_to_path(key)?;

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(key.to_string()))
            }
            Err(e) => Err(StorageError::DeleteFailed(format!(
                "Failed to delete file {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn public_url(&self, key: &str) -> String {
        self.generate_url(key)
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_storage() -> (tempfile::TempDir, LocalStorage) {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let storage = LocalStorage::new(dir.path(), "http://localhost:4000/files".to_string())
            .await
            .expect("Failed to create local storage");
        (dir, storage)
    }

    #[tokio::test]
    async fn test_put_get_exists_delete_roundtrip() {
        let (_dir, storage) = test_storage().await;

        assert!(!storage.exists("alice/photo.png").await.unwrap());

        let url = storage
            .put("alice/photo.png", "image/png", b"png bytes".to_vec())
            .await
            .unwrap();
        assert_eq!(url, "http://localhost:4000/files/alice/photo.png");

        assert!(storage.exists("alice/photo.png").await.unwrap());
        assert_eq!(
            storage.get("alice/photo.png").await.unwrap(),
            b"png bytes".to_vec()
        );

        storage.delete("alice/photo.png").await.unwrap();
        assert!(!storage.exists("alice/photo.png").await.unwrap());
    }

    #[tokio::test]
    async fn test_put_overwrites_existing_object() {
        let (_dir, storage) = test_storage().await;

        storage
            .put("alice/photo.png", "image/png", b"first".to_vec())
            .await
            .unwrap();
        storage
            .put("alice/photo.png", "image/png", b"second".to_vec())
            .await
            .unwrap();

        assert_eq!(
            storage.get("alice/photo.png").await.unwrap(),
            b"second".to_vec()
        );
    }

    #[tokio::test]
    async fn test_get_missing_object_is_not_found() {
        let (_dir, storage) = test_storage().await;
        assert!(matches!(
            storage.get("alice/missing.png").await,
            Err(StorageError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_traversal_keys_are_rejected() {
        let (_dir, storage) = test_storage().await;
        assert!(matches!(
            storage.get("../escape.png").await,
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(
            storage.put("/abs.png", "image/png", vec![]).await,
            Err(StorageError::InvalidKey(_))
        ));
    }
}
