//! Shared helpers used by both the decode and encode directions.

pub mod base64_helpers;

pub use base64_helpers::{decoded_len, is_base64_data, normalize_base64};
