//! Application setup and initialization
//!
//! All startup logic lives here rather than in main.rs: telemetry, the
//! credential store, the storage backend, and the router. Tests build the
//! router directly against in-memory backends instead of calling
//! `initialize_app`.

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::Result;
use assetcube_core::Config;
use assetcube_db::PgUploadKeyStore;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry();

    tracing::info!(environment = %config.environment, "Configuration loaded");

    // Credential store (read-only upload_keys table)
    let pool = database::setup_database(&config).await?;
    let upload_keys = Arc::new(PgUploadKeyStore::new(pool));

    // Storage backend
    let storage = storage::setup_storage(&config).await?;

    let state = Arc::new(AppState {
        config: config.clone(),
        storage,
        upload_keys,
    });

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
