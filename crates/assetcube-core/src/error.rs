//! Error types module
//!
//! This module provides the upload pipeline's error taxonomy. Every failure in
//! the pipeline is terminal for its request; each variant knows its HTTP
//! status, the client-facing body, and the level it should be logged at.
//! Internal detail (the `String` payloads) appears only in logs, never in
//! responses.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues like backend lookup errors
    Warn,
    /// Error level - for unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("disallowed content type: {0}")]
    InvalidFileType(String),

    #[error("file exceeds the upload size ceiling")]
    FileTooLarge,

    #[error("missing uploadKey, username, or file part")]
    MissingFields,

    #[error("malformed multipart body: {0}")]
    MalformedBody(String),

    #[error("upload key rejected")]
    InvalidCredential,

    #[error("upload key lookup failed: {0}")]
    KeyLookup(String),

    #[error("storage write failed: {0}")]
    StorageWrite(String),

    #[error("no unused name found within the probe limit")]
    TooManyCollisions,
}

impl UploadError {
    /// HTTP status code to return
    pub fn status_code(&self) -> u16 {
        match self {
            UploadError::InvalidFileType(_)
            | UploadError::FileTooLarge
            | UploadError::MissingFields
            | UploadError::MalformedBody(_) => 400,
            UploadError::InvalidCredential | UploadError::KeyLookup(_) => 403,
            UploadError::StorageWrite(_) | UploadError::TooManyCollisions => 500,
        }
    }

    /// Client-facing body. Backend and parse detail is never forwarded;
    /// credential failures collapse to one message regardless of cause.
    pub fn client_message(&self) -> &'static str {
        match self {
            UploadError::InvalidFileType(_) => "Only image files allowed",
            UploadError::FileTooLarge => "File too large (max 2MB)",
            UploadError::MissingFields | UploadError::MalformedBody(_) => {
                "Missing fields or invalid file"
            }
            UploadError::InvalidCredential | UploadError::KeyLookup(_) => "Invalid upload key",
            UploadError::StorageWrite(_) | UploadError::TooManyCollisions => "Upload failed",
        }
    }

    /// Log level for this error
    pub fn log_level(&self) -> LogLevel {
        match self {
            UploadError::InvalidFileType(_)
            | UploadError::FileTooLarge
            | UploadError::MissingFields
            | UploadError::MalformedBody(_)
            | UploadError::InvalidCredential => LogLevel::Debug,
            UploadError::KeyLookup(_) | UploadError::TooManyCollisions => LogLevel::Warn,
            UploadError::StorageWrite(_) => LogLevel::Error,
        }
    }

    /// Get the error type name for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            UploadError::InvalidFileType(_) => "InvalidFileType",
            UploadError::FileTooLarge => "FileTooLarge",
            UploadError::MissingFields => "MissingFields",
            UploadError::MalformedBody(_) => "MalformedBody",
            UploadError::InvalidCredential => "InvalidCredential",
            UploadError::KeyLookup(_) => "KeyLookup",
            UploadError::StorageWrite(_) => "StorageWrite",
            UploadError::TooManyCollisions => "TooManyCollisions",
        }
    }
}
