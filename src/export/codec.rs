//! `data=` link payload: JSON, percent-encoded like JavaScript's
//! `encodeURIComponent`, then standard base64.

use crate::errors::{AppError, AppResult};
use crate::models::State;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters `encodeURIComponent` leaves untouched.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const DATA_PARAM: &str = "data";

pub fn encode(state: &State) -> AppResult<String> {
    let json = serde_json::to_string(state)?;
    let escaped = utf8_percent_encode(&json, URI_COMPONENT).to_string();
    Ok(STANDARD.encode(escaped.as_bytes()))
}

pub fn decode(b64: &str) -> AppResult<State> {
    // query strings turn '+' into ' '
    let cleaned = b64.trim().replace(' ', "+");

    let bytes = STANDARD
        .decode(cleaned.as_bytes())
        .map_err(|e| AppError::Import(format!("invalid base64: {}", e)))?;
    let escaped =
        String::from_utf8(bytes).map_err(|e| AppError::Import(format!("invalid text: {}", e)))?;
    let json = percent_decode_str(&escaped)
        .decode_utf8()
        .map_err(|e| AppError::Import(format!("invalid escape sequence: {}", e)))?;

    serde_json::from_str(&json).map_err(|e| AppError::Import(format!("invalid payload: {}", e)))
}

/// `"{base_url}?data=…"`, or `&data=` when the base already has a query.
pub fn export_link(base_url: &str, state: &State) -> AppResult<String> {
    let sep = if base_url.contains('?') { '&' } else { '?' };
    Ok(format!("{}{}{}={}", base_url, sep, DATA_PARAM, encode(state)?))
}

fn cut_at_delimiters(s: &str) -> &str {
    s.split(['&', '#']).next().unwrap_or(s)
}

/// Pull the payload out of whatever the user pasted.
///
/// Accepts a full link, anything containing `data=`, or the bare value.
pub fn extract_data(src: &str) -> String {
    let src = src.trim();
    let prefix = format!("{}=", DATA_PARAM);

    if src.contains("://") {
        if let Some((_, query)) = src.split_once('?') {
            let query = query.split('#').next().unwrap_or(query);
            for pair in query.split('&') {
                if let Some(value) = pair.strip_prefix(&prefix) {
                    return percent_decode_str(value).decode_utf8_lossy().into_owned();
                }
            }
        }
        return src.to_string();
    }

    match src.find(&prefix) {
        Some(idx) => cut_at_delimiters(&src[idx + prefix.len()..]).to_string(),
        None => src.to_string(),
    }
}
