//! Upload pipeline service
//!
//! Orchestrates the post-parse stages of an upload: credential check,
//! collision-free name resolution, and the storage write. Each stage is one or
//! more round trips to an external backend; nothing here retries, and every
//! failure is terminal for the request.

use std::sync::Arc;

use assetcube_core::constants::MAX_NAME_PROBES;
use assetcube_core::filename::split_filename;
use assetcube_core::UploadError;
use assetcube_storage::object_key;
use subtle::ConstantTimeEq;

use crate::state::AppState;

pub struct UploadService {
    state: Arc<AppState>,
}

impl UploadService {
    pub fn new(state: &Arc<AppState>) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// Compare the supplied upload key against the user's stored key.
    ///
    /// A missing record, a lookup failure, and a mismatch all collapse into
    /// the same forbidden outcome for the caller; only the log distinguishes
    /// them. The comparison itself is constant-time.
    pub async fn verify_upload_key(
        &self,
        username: &str,
        supplied_key: &str,
    ) -> Result<(), UploadError> {
        let stored = self
            .state
            .upload_keys
            .fetch_key(username)
            .await
            .map_err(|e| UploadError::KeyLookup(e.to_string()))?;

        let Some(stored) = stored else {
            return Err(UploadError::InvalidCredential);
        };

        if stored.as_bytes().ct_eq(supplied_key.as_bytes()).into() {
            Ok(())
        } else {
            Err(UploadError::InvalidCredential)
        }
    }

    /// Find a destination name that does not exist under the user's prefix.
    ///
    /// Linear probe: the original name first, then `base(1)ext`, `base(2)ext`,
    /// ... with one existence round trip per candidate. Not atomic with the
    /// later write; two concurrent uploads of the same name can both pass the
    /// probe and the second write wins. Probing stops at `MAX_NAME_PROBES`.
    ///
    /// Returns `(chosen_name, renamed)`.
    pub async fn resolve_destination(
        &self,
        username: &str,
        filename: &str,
    ) -> Result<(String, bool), UploadError> {
        let (base, ext) = split_filename(filename);
        let mut candidate = filename.to_string();
        let mut counter: u32 = 0;

        loop {
            let key = object_key(username, &candidate)
                .map_err(|e| UploadError::MalformedBody(e.to_string()))?;

            let taken = self
                .state
                .storage
                .exists(&key)
                .await
                .map_err(|e| UploadError::StorageWrite(e.to_string()))?;

            if !taken {
                break;
            }

            counter += 1;
            if counter > MAX_NAME_PROBES {
                tracing::warn!(
                    username = %username,
                    filename = %filename,
                    probes = MAX_NAME_PROBES,
                    "Collision probe limit reached"
                );
                return Err(UploadError::TooManyCollisions);
            }
            candidate = format!("{}({}){}", base, counter, ext);
        }

        let renamed = candidate != filename;
        Ok((candidate, renamed))
    }

    /// Write the file at its resolved name. Upsert semantics: an object that
    /// appeared at the key since the probe is overwritten.
    pub async fn store(
        &self,
        username: &str,
        final_name: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<String, UploadError> {
        let key = object_key(username, final_name)
            .map_err(|e| UploadError::MalformedBody(e.to_string()))?;

        self.state
            .storage
            .put(&key, content_type, data)
            .await
            .map_err(|e| UploadError::StorageWrite(e.to_string()))
    }
}
