//! Multipart form extraction for the upload endpoint.
//!
//! Walks the form once. Text fields `uploadKey` and `username` are collected
//! last-value-wins; any part carrying a filename is treated as the file,
//! whatever its field name. The file's declared content type is checked before
//! a single byte is buffered, and the size ceiling is enforced on the
//! cumulative streamed count as chunks arrive, so an oversized or disallowed
//! part aborts the parse without buffering the rest.

use assetcube_core::constants::MAX_UPLOAD_BYTES;
use assetcube_core::filename::basename;
use assetcube_core::validation::is_allowed_image_type;
use assetcube_core::UploadError;
use axum::extract::multipart::Field;
use axum::extract::Multipart;

/// A fully buffered, validated file part.
pub struct ReceivedFile {
    pub data: Vec<u8>,
    pub filename: String,
    pub content_type: String,
}

/// The assembled upload request.
pub struct UploadForm {
    pub upload_key: String,
    pub username: String,
    pub file: ReceivedFile,
}

/// Parse the multipart body into an `UploadForm`.
///
/// If several file parts are sent, each is validated and buffered in turn and
/// only the last one is kept. Decode-level failures surface as
/// `MalformedBody`; a parse that completes without all three inputs surfaces
/// as `MissingFields`.
pub async fn extract_upload_form(mut multipart: Multipart) -> Result<UploadForm, UploadError> {
    let mut upload_key: Option<String> = None;
    let mut username: Option<String> = None;
    let mut file: Option<ReceivedFile> = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::MalformedBody(e.to_string()))?
    {
        if field.file_name().is_some() {
            // Earlier file buffer is dropped here; last fully-read part wins.
            file = Some(read_file_part(&mut field).await?);
            continue;
        }

        match field.name() {
            Some("uploadKey") => {
                upload_key = Some(read_text(field).await?);
            }
            Some("username") => {
                username = Some(read_text(field).await?);
            }
            _ => {
                drain_field(&mut field).await?;
            }
        }
    }

    let (Some(upload_key), Some(username), Some(file)) = (upload_key, username, file) else {
        return Err(UploadError::MissingFields);
    };

    if upload_key.is_empty() || username.is_empty() || file.filename.is_empty() {
        return Err(UploadError::MissingFields);
    }

    Ok(UploadForm {
        upload_key,
        username,
        file,
    })
}

/// Stream one file part, rejecting on declared type before buffering and on
/// cumulative size as chunks arrive.
async fn read_file_part(field: &mut Field<'_>) -> Result<ReceivedFile, UploadError> {
    let filename = basename(field.file_name().unwrap_or_default()).to_string();
    let content_type = field
        .content_type()
        .map(str::to_string)
        .unwrap_or_else(|| "application/octet-stream".to_string());

    if !is_allowed_image_type(&content_type) {
        return Err(UploadError::InvalidFileType(content_type));
    }

    let mut data: Vec<u8> = Vec::new();
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| UploadError::MalformedBody(e.to_string()))?
    {
        if data.len() + chunk.len() > MAX_UPLOAD_BYTES {
            return Err(UploadError::FileTooLarge);
        }
        data.extend_from_slice(&chunk);
    }

    Ok(ReceivedFile {
        data,
        filename,
        content_type,
    })
}

async fn read_text(field: Field<'_>) -> Result<String, UploadError> {
    field
        .text()
        .await
        .map_err(|e| UploadError::MalformedBody(e.to_string()))
}

/// Consume and discard an unrecognized text field.
async fn drain_field(field: &mut Field<'_>) -> Result<(), UploadError> {
    while field
        .chunk()
        .await
        .map_err(|e| UploadError::MalformedBody(e.to_string()))?
        .is_some()
    {}
    Ok(())
}
