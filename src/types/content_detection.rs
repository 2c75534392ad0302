//! Content Type Detection
//!
//! Best-guess file type for a decoded byte sequence. This is a heuristic, not
//! a parser: only a short prefix is inspected and file structure is never
//! validated.
//!
//! ## Evaluation order
//!
//! 1. **Binary magic numbers** at offset 0, checked against a fixed, ordered table
//! 2. **Text heuristics** over the first [`TEXT_WINDOW`] bytes, in a fixed order
//! 3. **Binary fallback** (`.bin`) when nothing matches
//!
//! Earlier rules win. Detection is total: every input, including the empty
//! one, maps to exactly one [`ContentType`].
//!
//! ## Text window
//!
//! The text window is treated as raw bytes, one byte per character
//! (ISO-8859-1 style). Multi-byte UTF-8 sequences cut at the window edge are
//! therefore never an error; their bytes simply fail the printable check.
//!
//! ## Usage
//!
//! ```rust
//! use b64_inspect::types::content_detection::{ContentType, ImageFormat};
//!
//! let data = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]; // PNG magic
//! let content_type = ContentType::detect(&data);
//! assert_eq!(content_type, ContentType::Image(ImageFormat::Png));
//! assert_eq!(content_type.extension(), ".png");
//! ```

use lazy_static::lazy_static;
use regex::bytes::Regex;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of leading bytes the text heuristics look at
pub const TEXT_WINDOW: usize = 32;

/// Bytes read from a file on disk; covers both the magic numbers and the text window
pub const SNIFF_PREFIX_BYTES: usize = TEXT_WINDOW;

lazy_static! {
    /// Printable ASCII plus whitespace (Latin-1 subset, NBSP included), whole window
    static ref PRINTABLE_WINDOW: Regex =
        Regex::new(r"(?-u)^[\x20-\x7E\t\n\x0B\x0C\r\xA0]+$").unwrap();
}

/// Image format detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    /// PNG image (magic: 89 50 4E 47)
    Png,
    /// JPEG image (magic: FF D8 FF)
    Jpeg,
    /// GIF image (magic: GIF)
    Gif,
    /// BMP image (magic: BM)
    Bmp,
    /// ICO icon (magic: 00 00 01 00)
    Ico,
    /// Little-endian TIFF (magic: 49 49 2A 00)
    Tiff,
    /// WebP image (magic: RIFF....WEBP)
    WebP,
    /// SVG image (`<svg` in the text window)
    Svg,
}

/// Audio format detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioFormat {
    /// WAV audio (magic: RIFF....WAVE)
    Wav,
    /// OGG container (magic: OggS)
    Ogg,
}

/// Document format detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentFormat {
    /// PDF document (magic: %PDF)
    Pdf,
    /// HTML page (`<!DOCTYPE html` or `<html` in the text window)
    Html,
}

/// Archive format detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArchiveFormat {
    /// ZIP archive (magic: PK 03 04)
    Zip,
}

/// Source code detection (keyword based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceFormat {
    JavaScript,
    Java,
    C,
}

/// Structured data format detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructuredFormat {
    Json,
    Xml,
}

/// Text format detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextFormat {
    /// Printable ASCII and whitespace only
    PlainText,
    /// Text that mentions `base64`, most likely still-encoded data
    Base64,
}

/// Content type enum covering all detectable formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    Image(ImageFormat),
    Audio(AudioFormat),
    Document(DocumentFormat),
    Archive(ArchiveFormat),
    Source(SourceFormat),
    Structured(StructuredFormat),
    Text(TextFormat),
    /// No rule matched
    Binary,
}

impl ContentType {
    /// Detect content type from byte data
    ///
    /// Binary signatures are checked first, then the text heuristics, then
    /// the binary fallback. Never fails.
    pub fn detect(data: &[u8]) -> Self {
        if let Some(signature) = Self::detect_signature(data) {
            return signature;
        }

        let window = &data[..data.len().min(TEXT_WINDOW)];
        if let Some(text) = Self::detect_text(window) {
            return text;
        }

        ContentType::Binary
    }

    /// Detect the content type of a file from its leading bytes only
    pub fn detect_file(path: &Path) -> std::io::Result<Self> {
        let mut prefix = Vec::with_capacity(SNIFF_PREFIX_BYTES);
        File::open(path)?
            .take(SNIFF_PREFIX_BYTES as u64)
            .read_to_end(&mut prefix)?;
        Ok(Self::detect(&prefix))
    }

    /// Canonical file extension, with leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            ContentType::Image(fmt) => match fmt {
                ImageFormat::Png => ".png",
                ImageFormat::Jpeg => ".jpg",
                ImageFormat::Gif => ".gif",
                ImageFormat::Bmp => ".bmp",
                ImageFormat::Ico => ".ico",
                ImageFormat::Tiff => ".tif",
                ImageFormat::WebP => ".webp",
                ImageFormat::Svg => ".svg",
            },
            ContentType::Audio(fmt) => match fmt {
                AudioFormat::Wav => ".wav",
                AudioFormat::Ogg => ".ogg",
            },
            ContentType::Document(fmt) => match fmt {
                DocumentFormat::Pdf => ".pdf",
                DocumentFormat::Html => ".html",
            },
            ContentType::Archive(ArchiveFormat::Zip) => ".zip",
            ContentType::Source(fmt) => match fmt {
                SourceFormat::JavaScript => ".js",
                SourceFormat::Java => ".java",
                SourceFormat::C => ".c",
            },
            ContentType::Structured(fmt) => match fmt {
                StructuredFormat::Json => ".json",
                StructuredFormat::Xml => ".xml",
            },
            ContentType::Text(fmt) => match fmt {
                TextFormat::PlainText => ".txt",
                TextFormat::Base64 => ".b64",
            },
            ContentType::Binary => ".bin",
        }
    }

    /// Get MIME type string for this content type
    pub fn mime_type(&self) -> &'static str {
        match self {
            ContentType::Image(fmt) => fmt.mime_type(),
            ContentType::Audio(AudioFormat::Wav) => "audio/wav",
            ContentType::Audio(AudioFormat::Ogg) => "audio/ogg",
            ContentType::Document(DocumentFormat::Pdf) => "application/pdf",
            ContentType::Document(DocumentFormat::Html) => "text/html",
            ContentType::Archive(ArchiveFormat::Zip) => "application/zip",
            ContentType::Source(SourceFormat::JavaScript) => "text/javascript",
            ContentType::Source(SourceFormat::Java) => "text/x-java-source",
            ContentType::Source(SourceFormat::C) => "text/x-c",
            ContentType::Structured(StructuredFormat::Json) => "application/json",
            ContentType::Structured(StructuredFormat::Xml) => "application/xml",
            ContentType::Text(_) => "text/plain",
            ContentType::Binary => "application/octet-stream",
        }
    }

    /// Return the high-level category string for this content type
    pub fn category(&self) -> &'static str {
        match self {
            ContentType::Image(_) => "Images",
            ContentType::Audio(_) => "Audio",
            ContentType::Document(_) => "Documents",
            ContentType::Archive(_) => "Archives",
            ContentType::Source(_) => "Source Code",
            ContentType::Structured(_) => "Structured Data",
            ContentType::Text(_) => "Text",
            ContentType::Binary => "Other",
        }
    }

    /// Ordered magic-number table at offset 0
    fn detect_signature(data: &[u8]) -> Option<Self> {
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            return Some(ContentType::Image(ImageFormat::Png));
        }
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(ContentType::Image(ImageFormat::Jpeg));
        }
        if data.starts_with(b"GIF") {
            return Some(ContentType::Image(ImageFormat::Gif));
        }
        if data.starts_with(b"%PDF") {
            return Some(ContentType::Document(DocumentFormat::Pdf));
        }
        if data.starts_with(&[0x50, 0x4B, 0x03, 0x04]) {
            return Some(ContentType::Archive(ArchiveFormat::Zip));
        }
        if data.starts_with(b"BM") {
            return Some(ContentType::Image(ImageFormat::Bmp));
        }
        if data.starts_with(&[0x00, 0x00, 0x01, 0x00]) {
            return Some(ContentType::Image(ImageFormat::Ico));
        }
        if data.starts_with(&[0x49, 0x49, 0x2A, 0x00]) {
            return Some(ContentType::Image(ImageFormat::Tiff));
        }

        // RIFF container: only WEBP and WAVE are claimed, anything else falls through
        if data.starts_with(b"RIFF") {
            match data.get(8..12) {
                Some(b"WEBP") => return Some(ContentType::Image(ImageFormat::WebP)),
                Some(b"WAVE") => return Some(ContentType::Audio(AudioFormat::Wav)),
                _ => {}
            }
        }

        if data.starts_with(b"OggS") {
            return Some(ContentType::Audio(AudioFormat::Ogg));
        }

        None
    }

    /// Keyword heuristics over the text window
    fn detect_text(window: &[u8]) -> Option<Self> {
        if contains(window, b"<svg") {
            return Some(ContentType::Image(ImageFormat::Svg));
        }
        if contains(window, b"<!DOCTYPE html") || contains(window, b"<html") {
            return Some(ContentType::Document(DocumentFormat::Html));
        }

        let trimmed = trim_whitespace(window);
        if trimmed.starts_with(b"{") && contains(window, b":") {
            return Some(ContentType::Structured(StructuredFormat::Json));
        }
        if trimmed.starts_with(b"[") && contains(window, b"]") {
            return Some(ContentType::Structured(StructuredFormat::Json));
        }

        if contains(window, b"function")
            || contains(window, b"=>")
            || contains(window, b"var ")
            || contains(window, b"const ")
        {
            return Some(ContentType::Source(SourceFormat::JavaScript));
        }
        if contains(window, b"import ")
            || contains(window, b"from ")
            || contains(window, b"export ")
        {
            return Some(ContentType::Source(SourceFormat::JavaScript));
        }
        if contains(window, b"class ") && contains(window, b"{") {
            return Some(ContentType::Source(SourceFormat::Java));
        }
        if contains(window, b"#include") || contains(window, b"int main") {
            return Some(ContentType::Source(SourceFormat::C));
        }

        if window.starts_with(b"<?xml") {
            return Some(ContentType::Structured(StructuredFormat::Xml));
        }
        if contains(window, b"base64") {
            return Some(ContentType::Text(TextFormat::Base64));
        }
        if PRINTABLE_WINDOW.is_match(window) {
            return Some(ContentType::Text(TextFormat::PlainText));
        }

        None
    }
}

impl ImageFormat {
    /// Get the file extension without leading dot
    pub fn extension(&self) -> &'static str {
        ContentType::Image(*self).extension().trim_start_matches('.')
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Bmp => "image/bmp",
            ImageFormat::Ico => "image/x-icon",
            ImageFormat::Tiff => "image/tiff",
            ImageFormat::WebP => "image/webp",
            ImageFormat::Svg => "image/svg+xml",
        }
    }
}

/// Best-guess extension (with leading dot) for a decoded byte sequence
pub fn guess_file_extension(data: &[u8]) -> &'static str {
    ContentType::detect(data).extension()
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

fn is_window_whitespace(b: u8) -> bool {
    matches!(b, 0x09..=0x0D | 0x20 | 0xA0)
}

fn trim_whitespace(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|&b| !is_window_whitespace(b))
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|&b| !is_window_whitespace(b))
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}
