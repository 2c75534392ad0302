use crate::cli::prompt::ask_filename;
use crate::config::AppConfig;
use crate::decoder::output::{DecodeReport, DecodeSession, OutputManager};
use crate::decoder::{Base64Decoder, Confirmation, InputSource, PendingConfirmation};
use crate::errors::{AppError, AppResult};
use clap::Args;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};

/// Decode base64 text and save the payload under a confirmed filename
#[derive(Args)]
pub struct DecodeCommand {
    /// Base64 text to decode ("-" reads standard input)
    pub text: Option<String>,

    /// Read the base64 text from a file (ignored when TEXT is given)
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,

    /// Output directory for decoded files (overrides config.toml)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Final filename, skipping the confirmation prompt
    #[arg(long, conflicts_with = "yes")]
    pub name: Option<String>,

    /// Accept the suggested filename without asking
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Output format: text, json
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl DecodeCommand {
    pub fn run(&self) -> AppResult<()> {
        let config = AppConfig::load()
            .map_err(|e| AppError::Config(format!("Failed to load configuration: {}", e)))?;

        let output_dir = self
            .output_dir
            .clone()
            .unwrap_or_else(|| config.output.directory.clone());
        info!("Output directory: {}", output_dir.display());

        let source = InputSource::select(self.text.as_deref(), self.file.clone())?;
        let decoder = Base64Decoder::from_config(&config);
        let pending = decoder.decode_input(&source)?;

        let stdin = io::stdin();
        let confirmation = choose_confirmation(
            self.name.as_deref(),
            self.yes,
            &source,
            &pending,
            &mut stdin.lock(),
            &mut io::stderr(),
        )?;
        let artifact = pending.resolve(confirmation)?;

        let mut session = DecodeSession::new(OutputManager::new(output_dir)?);
        if session.output().artifact_exists(&artifact.file_name) {
            warn!("Overwriting existing file {}", artifact.file_name);
        }

        let path = session.deliver(artifact)?;
        if let Some(artifact) = session.last() {
            let report = DecodeReport::new(artifact, Some(&path));
            match self.format.as_str() {
                "json" => print_report_json(&report)?,
                _ => print_report_text(&report),
            }
        }

        Ok(())
    }
}

/// Decide the final filename: `--name`, then `--yes`, then stdin input
/// (already drained, so nobody is left to answer), then the prompt
pub fn choose_confirmation<R: BufRead, W: Write>(
    name: Option<&str>,
    yes: bool,
    source: &InputSource,
    pending: &PendingConfirmation,
    input: &mut R,
    output: &mut W,
) -> AppResult<Confirmation> {
    if let Some(name) = name {
        return Ok(Confirmation::Rename(name.to_string()));
    }
    if yes {
        return Ok(Confirmation::Accept);
    }
    if *source == InputSource::Stdin {
        info!(
            "Input came from stdin, keeping suggested name {}",
            pending.suggested_name()
        );
        return Ok(Confirmation::Accept);
    }

    ask_filename(pending, input, output)
}

/// Print decode result in text format
fn print_report_text(report: &DecodeReport) {
    println!("Saved: {}", report.path.as_deref().unwrap_or(&report.file_name));
    println!("  Type:      {} ({})", report.extension, report.mime_type);
    println!("  Category:  {}", report.category);
    println!("  Size:      {} ({} bytes)", report.size_human, report.size_bytes);
    println!("  SHA-256:   {}", report.sha256);
    println!("  Head:      {}", report.head_hex);
    if report.file_name != report.suggested_name {
        println!("  Suggested: {}", report.suggested_name);
    }
}

/// Print decode result in JSON format
fn print_report_json(report: &DecodeReport) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
