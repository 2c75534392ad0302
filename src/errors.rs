use crate::decoder::output::OutputError;
use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Neither pasted text nor a file was supplied
    #[error("Please paste Base64 text or select a Base64 file first")]
    EmptyInput,

    /// Cleaned input is not valid padded base64
    #[error("Input does not appear to be valid Base64 data: {0}")]
    MalformedInput(String),

    /// Input exceeds a configured size cap
    #[error("Input too large: {size} bytes (max {limit} bytes)")]
    InputTooLarge { size: u64, limit: u64 },

    /// A file pattern given on the command line does not parse
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),

    /// User abandoned the operation at the filename confirmation step
    #[error("Decode cancelled; nothing was written")]
    Cancelled,

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Artifact output errors
    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

impl AppError {
    /// Whether this error falls outside the anticipated failure kinds.
    ///
    /// Unexpected errors are logged in full and reported to the user with a
    /// generic message only.
    pub fn is_unexpected(&self) -> bool {
        matches!(
            self,
            AppError::Io(_) | AppError::Config(_) | AppError::Output(OutputError::Io(_))
        )
    }

    /// Message suitable for showing to the person running the tool
    pub fn user_message(&self) -> String {
        if self.is_unexpected() {
            "Unexpected decoding error. Re-run with RUST_LOG=debug for details.".to_string()
        } else {
            self.to_string()
        }
    }
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

impl From<base64::DecodeError> for AppError {
    fn from(err: base64::DecodeError) -> Self {
        AppError::MalformedInput(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(format!("JSON error: {}", err))
    }
}

impl From<glob::PatternError> for AppError {
    fn from(err: glob::PatternError) -> Self {
        AppError::InvalidPattern(err.to_string())
    }
}

/// A matched path that could not be read is an environment failure
impl From<glob::GlobError> for AppError {
    fn from(err: glob::GlobError) -> Self {
        AppError::Io(err.into_error())
    }
}
