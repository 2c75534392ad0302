use crate::errors::AppResult;
use crate::types::content_detection::ContentType;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Guess file types of existing files from their leading bytes
#[derive(Args)]
pub struct SniffCommand {
    /// Files or glob patterns (e.g. "downloads/*.bin")
    #[arg(required = true)]
    pub patterns: Vec<String>,

    /// Output format: text, json
    #[arg(long, default_value = "text")]
    pub format: String,
}

#[derive(Debug, Serialize)]
pub struct SniffResult {
    pub path: String,
    pub extension: &'static str,
    pub mime_type: &'static str,
    pub category: &'static str,
}

impl SniffCommand {
    pub fn run(&self) -> AppResult<()> {
        let results = sniff_patterns(&self.patterns)?;
        if results.is_empty() {
            warn!("No files matched {:?}", self.patterns);
        }

        match self.format.as_str() {
            "json" => println!("{}", serde_json::to_string_pretty(&results)?),
            _ => {
                for result in &results {
                    println!("{}\t{}\t{}", result.path, result.extension, result.mime_type);
                }
            }
        }

        Ok(())
    }
}

/// Expand each pattern and classify every regular file it matches
pub fn sniff_patterns(patterns: &[String]) -> AppResult<Vec<SniffResult>> {
    let mut results = Vec::new();

    for pattern in patterns {
        for entry in glob::glob(pattern)? {
            let path: PathBuf = entry?;
            if !path.is_file() {
                debug!("Skipping non-file {}", path.display());
                continue;
            }

            let content_type = ContentType::detect_file(&path)?;
            results.push(SniffResult {
                path: path.display().to_string(),
                extension: content_type.extension(),
                mime_type: content_type.mime_type(),
                category: content_type.category(),
            });
        }
    }

    Ok(results)
}
