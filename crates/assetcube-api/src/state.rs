//! Application state.
//!
//! One immutable `AppState` is built at startup and shared behind an `Arc`;
//! handlers hold no other cross-request state.

use assetcube_core::Config;
use assetcube_db::UploadKeyStore;
use assetcube_storage::ObjectStorage;
use std::sync::Arc;

pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn ObjectStorage>,
    pub upload_keys: Arc<dyn UploadKeyStore>,
}
