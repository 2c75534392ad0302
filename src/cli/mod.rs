use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;
pub mod prompt;

/// Base64 decoder with file type sniffing
#[derive(Parser)]
#[command(name = "b64-inspect")]
#[command(about = "Decode base64 into files, guessing the file type from its content")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Decode base64 text or a base64 file and save the payload
    Decode(commands::decode::DecodeCommand),
    /// Encode text or a file as base64
    Encode(commands::encode::EncodeCommand),
    /// Guess the file type of existing files
    Sniff(commands::sniff::SniffCommand),
}

/// Install the tracing subscriber
///
/// Uses RUST_LOG environment variable (defaults to "error" if not set)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run() -> AppResult<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode(command) => command.run(),
        Commands::Encode(command) => command.run(),
        Commands::Sniff(command) => command.run(),
    }
}
