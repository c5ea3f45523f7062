//! HTTP error response conversion
//!
//! This module provides HTTP-specific response conversion for `UploadError`.
//!
//! **Handler pattern:** return `Result<impl IntoResponse, HttpUploadError>`
//! and use `?` on pipeline results; errors render as the contract's plain-text
//! bodies and are logged at their variant's level before responding.

use assetcube_core::{LogLevel, UploadError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Wrapper type for UploadError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for UploadError (external type from assetcube-core)
#[derive(Debug)]
pub struct HttpUploadError(pub UploadError);

impl From<UploadError> for HttpUploadError {
    fn from(err: UploadError) -> Self {
        HttpUploadError(err)
    }
}

fn log_error(error: &UploadError) {
    let kind = error.kind();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_kind = kind, "Upload rejected");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_kind = kind, "Upload rejected");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_kind = kind, "Upload failed");
        }
    }
}

impl IntoResponse for HttpUploadError {
    fn into_response(self) -> Response {
        let error = &self.0;

        let status = StatusCode::from_u16(error.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(error);

        // Client sees only the contract body; detail stays in the logs.
        (status, error.client_message()).into_response()
    }
}
