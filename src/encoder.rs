//! Encode direction: text or file to standard padded base64

use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::utils::size::format_size;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// What to encode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeSource {
    Text(String),
    File(PathBuf),
}

impl EncodeSource {
    /// A file is only used when there is no non-blank text
    pub fn select(text: Option<&str>, file: Option<PathBuf>) -> AppResult<Self> {
        let has_text = text.is_some_and(|t| !t.trim().is_empty());
        match (text, file) {
            (Some(text), _) if has_text => Ok(EncodeSource::Text(text.to_string())),
            (_, Some(path)) => Ok(EncodeSource::File(path)),
            _ => Err(AppError::EmptyInput),
        }
    }
}

/// Base64 of the UTF-8 bytes of `text`
pub fn encode_text(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Base64 of a file's raw bytes, refusing files over `limit` bytes
pub fn encode_file(path: &Path, limit: u64) -> AppResult<String> {
    let size = fs::metadata(path)?.len();
    if size > limit {
        return Err(AppError::InputTooLarge { size, limit });
    }

    info!("File loaded: {} ({})", path.display(), format_size(size));
    let bytes = fs::read(path)?;
    Ok(STANDARD.encode(bytes))
}

/// Encodes text or files under the configured size cap
#[derive(Debug, Clone)]
pub struct Base64Encoder {
    max_encode_bytes: u64,
}

impl Base64Encoder {
    pub fn new(max_encode_bytes: u64) -> Self {
        Self { max_encode_bytes }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.limits.max_encode_bytes)
    }

    pub fn encode(&self, source: &EncodeSource) -> AppResult<String> {
        match source {
            EncodeSource::Text(text) => Ok(encode_text(text)),
            EncodeSource::File(path) => encode_file(path, self.max_encode_bytes),
        }
    }
}

impl Default for Base64Encoder {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_BYTES)
    }
}
