use crate::config::AppConfig;
use crate::encoder::{Base64Encoder, EncodeSource};
use crate::errors::{AppError, AppResult};
use crate::utils::size::format_size;
use clap::Args;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::info;

/// Encode text or a file as standard padded base64
#[derive(Args)]
pub struct EncodeCommand {
    /// Text to encode ("-" reads standard input)
    pub text: Option<String>,

    /// Encode the raw bytes of a file (ignored when TEXT is given)
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,

    /// Write the base64 to this file instead of standard output
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

impl EncodeCommand {
    pub fn run(&self) -> AppResult<()> {
        let config = AppConfig::load()
            .map_err(|e| AppError::Config(format!("Failed to load configuration: {}", e)))?;
        let encoder = Base64Encoder::from_config(&config);

        let text = match self.text.as_deref() {
            Some("-") => Some(read_stdin()?),
            other => other.map(str::to_string),
        };
        let source = EncodeSource::select(text.as_deref(), self.file.clone())?;
        let encoded = encoder.encode(&source)?;

        match &self.output {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)?;
                }
                fs::write(path, &encoded)?;
                info!(
                    "Wrote {} of base64 to {}",
                    format_size(encoded.len() as u64),
                    path.display()
                );
            }
            None => println!("{}", encoded),
        }

        Ok(())
    }
}

fn read_stdin() -> AppResult<String> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}
