use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// One mebibyte, the default cap for both directions
pub const DEFAULT_MAX_BYTES: u64 = 1024 * 1024;

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory decoded artifacts are written to
    pub directory: PathBuf,
    /// Prefix of the suggested filename
    pub filename_prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum size of a file accepted for encoding
    pub max_encode_bytes: u64,
    /// Maximum size of a decoded payload
    pub max_decoded_bytes: u64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("./decoded"),
            filename_prefix: "decoded".to_string(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_encode_bytes: DEFAULT_MAX_BYTES,
            max_decoded_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let output = OutputConfig::default();
        let limits = LimitsConfig::default();
        let config = Config::builder()
            .set_default("output.directory", output.directory.to_string_lossy().as_ref())?
            .set_default("output.filename_prefix", output.filename_prefix)?
            .set_default("limits.max_encode_bytes", limits.max_encode_bytes)?
            .set_default("limits.max_decoded_bytes", limits.max_decoded_bytes)?
            // Load from config.toml if it exists
            .add_source(File::with_name("config").required(false))
            // B64_OUTPUT__DIRECTORY style overrides for nested keys
            .add_source(
                config::Environment::with_prefix("B64")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // Flat environment variables with friendlier names
        if let Ok(dir) = env::var("B64_OUTPUT_DIR") {
            app_config.output.directory = PathBuf::from(dir);
        }

        if let Ok(value) = env::var("B64_MAX_ENCODE_BYTES") {
            app_config.limits.max_encode_bytes = parse_limit("B64_MAX_ENCODE_BYTES", &value)?;
        }

        if let Ok(value) = env::var("B64_MAX_DECODED_BYTES") {
            app_config.limits.max_decoded_bytes = parse_limit("B64_MAX_DECODED_BYTES", &value)?;
        }

        Ok(app_config)
    }

    /// Get default config values for CLI argument defaults
    pub fn get_defaults() -> Result<Self, ConfigError> {
        match Self::load() {
            Ok(config) => Ok(config),
            Err(_) => Ok(Self {
                output: OutputConfig::default(),
                limits: LimitsConfig::default(),
            }),
        }
    }
}

fn parse_limit(name: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::Message(format!("{} must be a byte count: {}", name, e)))
}
