//! Shared key generation for storage backends.
//!
//! Key format: `{username}/{filename}`. Every stored object lives under the
//! uploading user's prefix; this function is the only way keys are built, so
//! the prefix cannot be escaped by crafted names.

use crate::traits::{StorageError, StorageResult};

/// Build the storage key for a user's file.
///
/// Rejects empty segments, path separators inside a segment, and `..`
/// components. All backends must use this format for consistency.
pub fn object_key(username: &str, filename: &str) -> StorageResult<String> {
    for segment in [username, filename] {
        if segment.is_empty() {
            return Err(StorageError::InvalidKey(
                "Storage key segment is empty".to_string(),
            ));
        }
        if segment.contains('/') || segment.contains('\\') || segment == ".." {
            return Err(StorageError::InvalidKey(
                "Storage key contains invalid characters".to_string(),
            ));
        }
    }

    Ok(format!("{}/{}", username, filename))
}
