//! Type system for decoded payloads
//!
//! - `content_detection`: best-guess file type of a decoded byte sequence

pub mod content_detection;

pub use content_detection::{guess_file_extension, ContentType};
