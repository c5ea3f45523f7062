//! Upload limits and defaults.

/// Maximum accepted file size in bytes (2 MiB), enforced on the cumulative
/// streamed byte count of the file part, not on a declared Content-Length.
pub const MAX_UPLOAD_BYTES: usize = 2 * 1024 * 1024;

/// Content types accepted for upload. Compared after stripping MIME
/// parameters and lowercasing.
pub const ALLOWED_CONTENT_TYPES: [&str; 5] = [
    "image/png",
    "image/jpeg",
    "image/gif",
    "image/webp",
    "image/svg+xml",
];

/// Upper bound on collision-probe iterations in the name resolver. Exceeding
/// it fails the upload instead of probing forever.
pub const MAX_NAME_PROBES: u32 = 1000;

/// Bucket used when `S3_BUCKET` is not set.
pub const DEFAULT_BUCKET: &str = "uploads";

/// Host used for public file URLs when `PUBLIC_BASE_URL` is not set.
pub const DEFAULT_PUBLIC_BASE_URL: &str = "https://assetcube.netlify.app";
