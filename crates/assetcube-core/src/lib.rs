//! Assetcube Core Library
//!
//! This crate provides the domain types shared across all assetcube components:
//! configuration, the upload error taxonomy, upload limits, filename helpers,
//! and response models.

pub mod config;
pub mod constants;
pub mod error;
pub mod filename;
pub mod models;
pub mod storage_types;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{LogLevel, UploadError};
pub use models::UploadResponse;
pub use storage_types::StorageBackend;
