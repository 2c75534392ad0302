//! Base64 input helpers
//!
//! Normalisation of pasted or file-sourced text into the standard base64
//! alphabet, plus cheap heuristics that run before the strict decode.

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    /// Everything outside `A-Z a-z 0-9 + / =`
    static ref NON_BASE64: Regex = Regex::new(r"[^A-Za-z0-9+/=]").unwrap();
}

/// Strip every character that is not part of the padded base64 alphabet
///
/// Relative order is preserved. Whitespace, line breaks and markdown fences
/// are removed; no padding or length correction happens here.
///
/// # Example
/// ```
/// use b64_inspect::shared::normalize_base64;
/// assert_eq!(normalize_base64("```\nSGVs\nbG8=\n```"), "SGVsbG8=");
/// ```
pub fn normalize_base64(input: &str) -> Cow<'_, str> {
    NON_BASE64.replace_all(input, "")
}

/// Exact decoded length of a cleaned, well-formed base64 string
///
/// Returns `None` when the length is not a multiple of four, in which case
/// the strict decoder will reject the input anyway.
pub fn decoded_len(cleaned: &str) -> Option<u64> {
    if cleaned.len() % 4 != 0 {
        return None;
    }
    let padding = cleaned
        .as_bytes()
        .iter()
        .rev()
        .take(2)
        .take_while(|&&b| b == b'=')
        .count();
    Some((cleaned.len() / 4 * 3 - padding) as u64)
}

/// Check if data appears to be base64-encoded
///
/// Uses a heuristic approach: if at least 80% of bytes are valid base64 characters
/// (alphanumeric, +, /, =), the data is considered base64-encoded.
///
/// # Example
/// ```
/// use b64_inspect::shared::is_base64_data;
/// assert!(is_base64_data(b"iVBORw0KGgoAAAANSUhEUgAAABgAAAAYCAYAAADgdz34"));
/// assert!(!is_base64_data(b"Not base64 data!@#$%"));
/// ```
pub fn is_base64_data(data: &[u8]) -> bool {
    if data.is_empty() {
        return false;
    }

    let valid_chars = data
        .iter()
        .filter(|&&b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/' || b == b'=')
        .count();

    // At least 80% should be valid base64 characters
    let ratio = valid_chars as f64 / data.len() as f64;
    ratio >= 0.8
}
