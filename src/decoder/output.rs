use super::DecodedArtifact;
use crate::utils::size::format_size;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Number of leading bytes shown in the hex preview of a report
pub const HEAD_PREVIEW_BYTES: usize = 16;

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Output-specific error types
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid file path: {0}")]
    InvalidPath(String),
}

/// Writes confirmed artifacts into a single output directory
///
/// The confirmed name is otherwise unvalidated, but it always stays inside
/// the output directory: absolute names, `..` components and names that
/// cannot name a file at all (empty, `.`, trailing separator) are refused.
/// Subdirectories such as `images/a.png` are allowed.
pub struct OutputManager {
    base_dir: PathBuf,
}

impl OutputManager {
    /// Create a new OutputManager with the specified base directory
    pub fn new(base_dir: PathBuf) -> OutputResult<Self> {
        Ok(Self { base_dir })
    }

    /// Get the output directory path
    pub fn output_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Where an artifact with this name would be written
    pub fn artifact_path(&self, file_name: &str) -> OutputResult<PathBuf> {
        let relative = Path::new(file_name);
        let names_a_file = matches!(relative.components().next_back(), Some(Component::Normal(_)))
            && !file_name.ends_with('/')
            && !file_name.ends_with(std::path::MAIN_SEPARATOR);
        let stays_inside = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !names_a_file || !stays_inside {
            return Err(OutputError::InvalidPath(file_name.to_string()));
        }
        Ok(self.base_dir.join(relative))
    }

    /// Check if an artifact file already exists
    pub fn artifact_exists(&self, file_name: &str) -> bool {
        self.artifact_path(file_name)
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Write the decoded bytes unchanged
    /// Creates: <base_dir>/<file_name>
    pub fn write_artifact(&self, artifact: &DecodedArtifact) -> OutputResult<PathBuf> {
        let filepath = self.artifact_path(&artifact.file_name)?;
        if let Some(parent) = filepath.parent() {
            self.ensure_directory_exists(parent)?;
        }

        fs::write(&filepath, &artifact.bytes)?;
        Ok(filepath)
    }

    fn ensure_directory_exists(&self, dir: &Path) -> OutputResult<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

/// Holds the most recently produced artifact
///
/// Publishing replaces the held artifact in one step and hands back the
/// previous one so the caller can release it.
#[derive(Debug, Default)]
pub struct ArtifactSlot {
    current: Option<DecodedArtifact>,
}

impl ArtifactSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&DecodedArtifact> {
        self.current.as_ref()
    }

    /// Install a new artifact, returning the one it replaces
    pub fn publish(&mut self, artifact: DecodedArtifact) -> Option<DecodedArtifact> {
        let previous = self.current.replace(artifact);
        if let Some(old) = &previous {
            debug!("Releasing previous artifact {}", old.file_name);
        }
        previous
    }

    /// Drop whatever is held
    pub fn clear(&mut self) -> Option<DecodedArtifact> {
        self.current.take()
    }
}

/// Output side of the shell: writes each confirmed artifact, then makes it
/// the current one
pub struct DecodeSession {
    output: OutputManager,
    slot: ArtifactSlot,
}

impl DecodeSession {
    pub fn new(output: OutputManager) -> Self {
        Self {
            output,
            slot: ArtifactSlot::new(),
        }
    }

    pub fn output(&self) -> &OutputManager {
        &self.output
    }

    /// Most recently delivered artifact
    pub fn last(&self) -> Option<&DecodedArtifact> {
        self.slot.current()
    }

    /// Write the artifact and make it current; the slot is untouched on failure
    pub fn deliver(&mut self, artifact: DecodedArtifact) -> OutputResult<PathBuf> {
        let path = self.output.write_artifact(&artifact)?;
        drop(self.slot.publish(artifact));
        Ok(path)
    }
}

/// Summary of a decoded artifact for text or JSON output
#[derive(Debug, Clone, Serialize)]
pub struct DecodeReport {
    pub file_name: String,
    pub suggested_name: String,
    pub path: Option<String>,
    pub size_bytes: usize,
    pub size_human: String,
    pub extension: &'static str,
    pub mime_type: &'static str,
    pub category: &'static str,
    pub sha256: String,
    pub head_hex: String,
}

impl DecodeReport {
    pub fn new(artifact: &DecodedArtifact, path: Option<&Path>) -> Self {
        let head_len = artifact.bytes.len().min(HEAD_PREVIEW_BYTES);
        Self {
            file_name: artifact.file_name.clone(),
            suggested_name: artifact.suggested_name.clone(),
            path: path.map(|p| p.display().to_string()),
            size_bytes: artifact.size_bytes(),
            size_human: format_size(artifact.size_bytes() as u64),
            extension: artifact.content_type.extension(),
            mime_type: artifact.content_type.mime_type(),
            category: artifact.content_type.category(),
            sha256: hex::encode(Sha256::digest(&artifact.bytes)),
            head_hex: hex::encode(&artifact.bytes[..head_len]),
        }
    }
}
