//! HTTP status reason phrases.

use axum::http::StatusCode;

/// Get the canonical reason phrase for a status code.
///
/// # Arguments
/// * `code` - Numeric status code (e.g., 404)
///
/// # Returns
/// The reason phrase (e.g., "Not Found"), or an empty string if the code is
/// out of range or has no registered phrase.
pub fn status_text(code: i32) -> String {
    u16::try_from(code)
        .ok()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .and_then(|status| status.canonical_reason())
        .unwrap_or_default()
        .to_string()
}
