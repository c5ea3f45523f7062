//! Filename helpers for collision-resolved storage names.

/// Strip any path prefix from a client-supplied filename, handling both
/// separator styles. Browsers normally send a bare name; anything else is
/// reduced to its final component.
pub fn basename(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}

/// Split a filename into `(base, ext)` where `ext` includes the leading dot.
///
/// The extension is everything from the last dot onward, except that a dot in
/// the first position is part of the base (`.env` has no extension). Numbered
/// collision candidates are formed as `{base}(N){ext}`.
pub fn split_filename(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}
