//! Storage backend setup.

use anyhow::Result;
use assetcube_core::Config;
use assetcube_storage::{create_storage, ObjectStorage};
use std::sync::Arc;

/// Build the configured storage backend.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn ObjectStorage>> {
    let storage = create_storage(config)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize storage backend: {}", e))?;

    tracing::info!(
        backend = %storage.backend_type(),
        bucket = %config.s3_bucket,
        "Storage backend initialized"
    );

    Ok(storage)
}
