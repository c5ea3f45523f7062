//! Declared-content-type validation for incoming file parts.

use crate::constants::ALLOWED_CONTENT_TYPES;

/// Normalize a MIME type by stripping parameters (e.g. "image/png; charset=utf-8" -> "image/png").
fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}

/// Check a declared content type against the image allow-list. Compares the
/// normalized MIME type only, so parameters cannot bypass the list.
pub fn is_allowed_image_type(content_type: &str) -> bool {
    let normalized = normalize_mime_type(content_type).to_lowercase();
    ALLOWED_CONTENT_TYPES.iter().any(|ct| normalized == *ct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_list_matches_exact_set() {
        for ct in [
            "image/png",
            "image/jpeg",
            "image/gif",
            "image/webp",
            "image/svg+xml",
        ] {
            assert!(is_allowed_image_type(ct), "{ct} should be allowed");
        }
    }

    #[test]
    fn test_rejects_non_image_types() {
        assert!(!is_allowed_image_type("application/pdf"));
        assert!(!is_allowed_image_type("text/html"));
        assert!(!is_allowed_image_type("application/octet-stream"));
        assert!(!is_allowed_image_type("image/tiff"));
        assert!(!is_allowed_image_type(""));
    }

    #[test]
    fn test_parameters_and_case_do_not_bypass() {
        assert!(is_allowed_image_type("image/png; charset=utf-8"));
        assert!(is_allowed_image_type("IMAGE/PNG"));
        assert!(!is_allowed_image_type("application/pdf; fake=image/png"));
    }
}
