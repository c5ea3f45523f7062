//! PostgreSQL upload key store: reads the `upload_keys` table.

use crate::keys::{KeyStoreResult, UploadKeyStore};
use async_trait::async_trait;
use sqlx::PgPool;

/// Key store backed by the `upload_keys(username, upload_key)` table.
#[derive(Clone)]
pub struct PgUploadKeyStore {
    pool: PgPool,
}

impl PgUploadKeyStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UploadKeyStore for PgUploadKeyStore {
    #[tracing::instrument(skip(self), fields(db.table = "upload_keys"))]
    async fn fetch_key(&self, username: &str) -> KeyStoreResult<Option<String>> {
        let key: Option<String> =
            sqlx::query_scalar("SELECT upload_key FROM upload_keys WHERE username = $1")
                .bind(username)
                .fetch_optional(&self.pool)
                .await?;
        Ok(key)
    }
}
