//! Error types for PR info extraction.

use thiserror::Error;

/// Main error type for extraction operations.
#[derive(Error, Debug)]
pub enum ExtractError {
    // Configuration errors
    #[error("GITHUB_TOKEN environment variable is required")]
    MissingToken,

    // Extraction errors
    #[error("PR #{number} not found")]
    PrNotFound { number: u64 },

    #[error("API authentication failed: {0}")]
    Authentication(String),

    #[error("failed to extract PR info: {0}")]
    Api(String),

    // Serialization/parsing errors - automatic conversions via #[from]
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("regular expression error: {0}")]
    Regex(#[from] regex::Error),

    #[error("logger initialization error: {0}")]
    Logger(#[from] log::SetLoggerError),

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using ExtractError
pub type Result<T> = std::result::Result<T, ExtractError>;

// Wrap generic I/O errors in the Other variant
impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(color_eyre::Report::from(err))
    }
}

// Implement From for octocrab errors (GitHub API)
impl From<octocrab::Error> for ExtractError {
    fn from(err: octocrab::Error) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. }
                if source.status_code.as_u16() == 401
                    || source.status_code.as_u16() == 403 =>
            {
                Self::Authentication(format!("GitHub API error: {}", err))
            }
            _ => Self::Api(format!("GitHub API error: {}", err)),
        }
    }
}
