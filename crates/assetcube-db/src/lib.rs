//! Assetcube DB Library
//!
//! This crate provides the credential lookup seam: the `UploadKeyStore` trait
//! with a PostgreSQL implementation backed by the externally owned
//! `upload_keys` table, and an in-memory implementation for tests and local
//! development. The table is read-only from this system's perspective.

pub mod keys;
pub mod memory;
pub mod pg;

// Re-export commonly used types
pub use keys::{KeyStoreError, KeyStoreResult, UploadKeyStore};
pub use memory::MemoryUploadKeyStore;
pub use pg::PgUploadKeyStore;
