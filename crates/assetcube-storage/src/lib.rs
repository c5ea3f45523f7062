//! Assetcube Storage Library
//!
//! This crate provides the object-storage abstraction and implementations for
//! assetcube: an S3 backend (via `object_store`), a local-filesystem backend,
//! and an in-memory backend for tests and local development.
//!
//! # Object key format
//!
//! Keys are user-scoped: `{username}/{filename}`. Keys must not contain `..`,
//! a leading `/`, or a path separator inside either segment. Key generation is
//! centralized in the `keys` module so all backends stay consistent and the
//! tenant-isolation prefix cannot be escaped.

pub mod factory;
pub mod keys;
pub mod local;
pub mod memory;
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use assetcube_core::StorageBackend;
pub use factory::create_storage;
pub use keys::object_key;
pub use local::LocalStorage;
pub use memory::MemoryStorage;
pub use s3::S3Storage;
pub use traits::{ObjectStorage, StorageError, StorageResult};
