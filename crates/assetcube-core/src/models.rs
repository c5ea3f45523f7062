//! Response models.

use serde::{Deserialize, Serialize};

/// Body of a successful upload response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Public-facing URL of the stored file (`{base}/u/{username}/{name}`).
    pub url: String,
    /// Whether the filename was altered to avoid a collision.
    pub renamed: bool,
}
