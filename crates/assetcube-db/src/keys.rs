//! Credential store abstraction.

use async_trait::async_trait;
use thiserror::Error;

/// Key lookup errors
#[derive(Debug, Error)]
pub enum KeyStoreError {
    #[error("Query failed: {0}")]
    Query(String),
}

impl From<sqlx::Error> for KeyStoreError {
    fn from(err: sqlx::Error) -> Self {
        KeyStoreError::Query(err.to_string())
    }
}

/// Result type for key store operations
pub type KeyStoreResult<T> = Result<T, KeyStoreError>;

/// Read-only access to per-user upload keys.
///
/// One record per username holds the expected plaintext upload key. The store
/// is owned and populated externally; this system only reads it.
#[async_trait]
pub trait UploadKeyStore: Send + Sync {
    /// Fetch the stored upload key for a username. `Ok(None)` means no record
    /// exists for that user.
    async fn fetch_key(&self, username: &str) -> KeyStoreResult<Option<String>>;
}
