//! Upload handler
//!
//! The single write path: parse the multipart form, verify the upload key,
//! resolve a collision-free destination name, write to storage, and answer
//! with the public URL. Any stage failing ends the request with that stage's
//! status and body; nothing is written unless every check before the write
//! passed.

use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use assetcube_core::{UploadError, UploadResponse};

use crate::error::HttpUploadError;
use crate::multipart::extract_upload_form;
use crate::services::upload::UploadService;
use crate::state::AppState;

/// Characters percent-encoded in public URL path segments. Kept to controls
/// and URL delimiters so ordinary collision suffixes like `photo(1).png`
/// stay literal.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'%')
    .add(b'/')
    .add(b'\\');

/// Handle `POST /upload`.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, HttpUploadError> {
    // A body that is not multipart at all gets the same terse answer as a
    // truncated one; the extractor's own rejection text never reaches clients.
    let multipart = multipart.map_err(|e| UploadError::MalformedBody(e.to_string()))?;

    let form = extract_upload_form(multipart).await?;

    let service = UploadService::new(&state);

    service
        .verify_upload_key(&form.username, &form.upload_key)
        .await?;

    let (final_name, renamed) = service
        .resolve_destination(&form.username, &form.file.filename)
        .await?;

    let size_bytes = form.file.data.len();
    let storage_url = service
        .store(
            &form.username,
            &final_name,
            &form.file.content_type,
            form.file.data,
        )
        .await?;

    tracing::info!(
        username = %form.username,
        final_name = %final_name,
        renamed,
        size_bytes,
        storage_url = %storage_url,
        "Upload stored"
    );

    let url = public_file_url(&state.config.public_base_url, &form.username, &final_name);

    Ok(Json(UploadResponse { url, renamed }))
}

/// `/upload` accepts POST only.
pub async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}

/// The user-facing URL, distinct from the storage backend's own public URL.
fn public_file_url(base_url: &str, username: &str, final_name: &str) -> String {
    format!(
        "{}/u/{}/{}",
        base_url.trim_end_matches('/'),
        utf8_percent_encode(username, PATH_SEGMENT),
        utf8_percent_encode(final_name, PATH_SEGMENT),
    )
}
