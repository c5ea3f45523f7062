//! Test helpers: build the router over in-memory backends and construct
//! multipart bodies by hand so every field combination can be exercised.
//!
//! Run from workspace root: `cargo test -p assetcube-api`.

use assetcube_api::setup::routes::setup_routes;
use assetcube_api::state::AppState;
use assetcube_core::constants::{DEFAULT_BUCKET, DEFAULT_PUBLIC_BASE_URL};
use assetcube_core::{Config, StorageBackend};
use assetcube_db::MemoryUploadKeyStore;
use assetcube_storage::MemoryStorage;
use axum_test::TestServer;
use std::sync::Arc;

pub const BOUNDARY: &str = "----assetcube-test-boundary";

/// Test application: server plus handles on the backing stores for
/// assertions about what was (or was not) written.
pub struct TestApp {
    pub server: TestServer,
    pub storage: MemoryStorage,
    pub keys: MemoryUploadKeyStore,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

fn test_config() -> Config {
    Config {
        server_port: 0,
        environment: "test".to_string(),
        cors_origins: vec!["*".to_string()],
        database_url: "postgresql://localhost/assetcube".to_string(),
        db_max_connections: 5,
        db_timeout_seconds: 5,
        storage_backend: StorageBackend::Memory,
        s3_bucket: DEFAULT_BUCKET.to_string(),
        s3_region: None,
        s3_endpoint: None,
        local_storage_path: None,
        local_storage_base_url: None,
        public_base_url: DEFAULT_PUBLIC_BASE_URL.to_string(),
        http_concurrency_limit: 16,
    }
}

/// Setup test app over memory storage and a memory key store.
pub fn setup_test_app() -> TestApp {
    let storage = MemoryStorage::new(DEFAULT_BUCKET);
    let keys = MemoryUploadKeyStore::new();
    let config = test_config();

    let state = Arc::new(AppState {
        config: config.clone(),
        storage: Arc::new(storage.clone()),
        upload_keys: Arc::new(keys.clone()),
    });

    let router = setup_routes(&config, state).expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        storage,
        keys,
    }
}

/// Incremental `multipart/form-data` body builder.
#[derive(Default)]
pub struct MultipartBuilder {
    body: Vec<u8>,
}

impl MultipartBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, filename: &str, content_type: &str, data: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn build(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.body
    }
}

/// Content-Type header value matching `MultipartBuilder` bodies.
pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

/// A complete, valid upload body for `username` with the given file.
pub fn upload_body(
    upload_key: &str,
    username: &str,
    filename: &str,
    content_type: &str,
    data: &[u8],
) -> Vec<u8> {
    MultipartBuilder::new()
        .text("uploadKey", upload_key)
        .text("username", username)
        .file("file", filename, content_type, data)
        .build()
}
