//! Base64 decode pipeline
//!
//! Turns pasted or file-sourced text into a named, downloadable artifact:
//!
//! - input selection (pasted text wins over a file)
//! - normalisation to the base64 alphabet
//! - strict RFC 4648 decode
//! - content type sniffing
//! - suggested filename, held in a [`PendingConfirmation`] until the caller
//!   supplies a [`Confirmation`]
//!
//! Nothing here holds state between calls, and no artifact exists until the
//! confirmation resolves.

use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::shared::{decoded_len, is_base64_data, normalize_base64};
use crate::types::content_detection::ContentType;
use crate::utils::time::filename_timestamp;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub mod output;

/// Where the raw base64 text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Pasted text
    Text(String),
    /// Text content of a file
    File(PathBuf),
    /// Everything on standard input
    Stdin,
}

impl InputSource {
    /// Pick the input the way the decode button does: non-blank text first,
    /// then a file, otherwise nothing to decode.
    pub fn select(text: Option<&str>, file: Option<PathBuf>) -> AppResult<Self> {
        match (text.map(str::trim).filter(|t| !t.is_empty()), file) {
            (Some("-"), _) => Ok(InputSource::Stdin),
            (Some(text), _) => Ok(InputSource::Text(text.to_string())),
            (None, Some(path)) => Ok(InputSource::File(path)),
            (None, None) => Err(AppError::EmptyInput),
        }
    }

    /// Read the raw text, replacing invalid UTF-8 (the normaliser drops it anyway)
    pub fn read_raw(&self) -> AppResult<String> {
        self.read_raw_limited(u64::MAX)
    }

    /// Like [`Self::read_raw`], refusing files and stdin larger than `limit` bytes
    /// before their contents are held in memory
    pub fn read_raw_limited(&self, limit: u64) -> AppResult<String> {
        match self {
            InputSource::Text(text) => Ok(text.clone()),
            InputSource::File(path) => {
                let size = fs::metadata(path)?.len();
                if size > limit {
                    return Err(AppError::InputTooLarge { size, limit });
                }
                let bytes = fs::read(path)?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            InputSource::Stdin => {
                let mut bytes = Vec::new();
                std::io::stdin()
                    .lock()
                    .take(limit.saturating_add(1))
                    .read_to_end(&mut bytes)?;
                let size = bytes.len() as u64;
                if size > limit {
                    return Err(AppError::InputTooLarge { size, limit });
                }
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
        }
    }
}

/// Largest raw input accepted for a decoded-size cap
///
/// Twice the padded encoded length of `max_decoded_bytes`, which leaves room
/// for line wrapping, indentation and surrounding markup.
pub fn max_raw_input_bytes(max_decoded_bytes: u64) -> u64 {
    max_decoded_bytes
        .div_ceil(3)
        .saturating_mul(4)
        .saturating_mul(2)
}

/// Strict standard base64 decode of an already-normalised string
///
/// Requires canonical `=` padding and a length that is a multiple of four;
/// non-zero trailing bits are rejected. An empty string is malformed rather
/// than an empty payload.
pub fn decode_base64(cleaned: &str) -> AppResult<Vec<u8>> {
    if cleaned.is_empty() {
        return Err(AppError::MalformedInput(
            "no base64 characters found".to_string(),
        ));
    }
    Ok(STANDARD.decode(cleaned)?)
}

/// `<prefix>-<stamp><extension>`, e.g. `decoded-2024-01-02T03-04-05-678Z.png`
pub fn suggest_filename(prefix: &str, at: DateTime<Utc>, extension: &str) -> String {
    format!("{}-{}{}", prefix, filename_timestamp(at), extension)
}

/// Answer to a pending filename confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    /// Keep the suggested name
    Accept,
    /// Use this name instead; an empty string means no override
    Rename(String),
    /// Abandon the decode
    Cancel,
}

/// Decoded and classified payload waiting for a final filename
#[derive(Debug, Clone)]
pub struct PendingConfirmation {
    bytes: Vec<u8>,
    content_type: ContentType,
    suggested_name: String,
}

impl PendingConfirmation {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn extension(&self) -> &'static str {
        self.content_type.extension()
    }

    pub fn suggested_name(&self) -> &str {
        &self.suggested_name
    }

    /// Question shown to the user before the name is finalised
    pub fn prompt_message(&self) -> String {
        format!(
            "This looks like a '{}' file. Is that what you were expecting?\nRename it as you see fit [{}]: ",
            self.extension(),
            self.suggested_name
        )
    }

    /// Finalise the name, or drop everything on cancel
    pub fn resolve(self, confirmation: Confirmation) -> AppResult<DecodedArtifact> {
        let file_name = match confirmation {
            Confirmation::Accept => self.suggested_name.clone(),
            Confirmation::Rename(name) if name.is_empty() => self.suggested_name.clone(),
            Confirmation::Rename(name) => name,
            Confirmation::Cancel => {
                debug!("Confirmation cancelled, discarding {} bytes", self.bytes.len());
                return Err(AppError::Cancelled);
            }
        };

        Ok(DecodedArtifact {
            file_name,
            suggested_name: self.suggested_name,
            bytes: self.bytes,
            content_type: self.content_type,
        })
    }
}

/// Decoded payload with its confirmed filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedArtifact {
    pub file_name: String,
    pub suggested_name: String,
    pub bytes: Vec<u8>,
    pub content_type: ContentType,
}

impl DecodedArtifact {
    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the user kept the suggested name
    pub fn is_renamed(&self) -> bool {
        self.file_name != self.suggested_name
    }
}

/// Normalise → decode → classify, stopping at the filename confirmation
#[derive(Debug, Clone)]
pub struct Base64Decoder {
    max_decoded_bytes: u64,
    filename_prefix: String,
}

impl Base64Decoder {
    pub fn new(max_decoded_bytes: u64, filename_prefix: impl Into<String>) -> Self {
        Self {
            max_decoded_bytes,
            filename_prefix: filename_prefix.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.limits.max_decoded_bytes,
            config.output.filename_prefix.clone(),
        )
    }

    pub fn max_decoded_bytes(&self) -> u64 {
        self.max_decoded_bytes
    }

    /// Cap applied to file and stdin input before it is read
    pub fn max_raw_input_bytes(&self) -> u64 {
        max_raw_input_bytes(self.max_decoded_bytes)
    }

    /// Read the source and run the pipeline up to the confirmation
    pub fn decode_input(&self, source: &InputSource) -> AppResult<PendingConfirmation> {
        if let InputSource::File(path) = source {
            info!("Reading base64 from {}", path.display());
        }
        let raw = source.read_raw_limited(self.max_raw_input_bytes())?;
        self.decode_text(&raw)
    }

    pub fn decode_text(&self, raw: &str) -> AppResult<PendingConfirmation> {
        self.decode_text_at(raw, Utc::now())
    }

    /// Same as [`Self::decode_text`] with an explicit timestamp for the suggested name
    pub fn decode_text_at(&self, raw: &str, at: DateTime<Utc>) -> AppResult<PendingConfirmation> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(AppError::EmptyInput);
        }

        if !is_base64_data(raw.as_bytes()) {
            warn!("Input is mostly outside the base64 alphabet; stray characters will be dropped");
        }

        let cleaned = normalize_base64(raw);
        debug!(
            "Normalised {} input bytes to {} base64 characters",
            raw.len(),
            cleaned.len()
        );

        if let Some(size) = decoded_len(&cleaned) {
            if size > self.max_decoded_bytes {
                return Err(AppError::InputTooLarge {
                    size,
                    limit: self.max_decoded_bytes,
                });
            }
        }

        let bytes = decode_base64(&cleaned)?;
        let content_type = ContentType::detect(&bytes);
        let suggested_name =
            suggest_filename(&self.filename_prefix, at, content_type.extension());

        info!(
            "Decoded {} bytes, looks like {} ({})",
            bytes.len(),
            content_type.extension(),
            content_type.mime_type()
        );

        Ok(PendingConfirmation {
            bytes,
            content_type,
            suggested_name,
        })
    }
}

impl Default for Base64Decoder {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_BYTES, "decoded")
    }
}
