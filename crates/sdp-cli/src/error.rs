//! Error types for the SDP CLI
//!
//! User-facing errors with clear, actionable messages. Note that external
//! lookup failures (GBIF, Red List, encyclopedia) are never errors at this
//! level: the lookup clients resolve them to fallback values internally.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Comprehensive error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Species dataset file is missing
    #[error("Dataset not found: '{0}'. Pass --dataset or set SDP_DATASET to point at your species CSV.")]
    DatasetNotFound(String),

    /// Species is not present in the dataset
    #[error("Species '{0}' is not in the dataset. Run 'sdp search' to browse the recorded species.")]
    SpeciesNotFound(String),

    /// Dataset could not be parsed
    #[error("Invalid dataset: {0}")]
    InvalidDataset(#[from] sdp_common::SdpError),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("Network request failed: {0}. Check your internet connection.")]
    Http(#[from] reqwest::Error),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your environment variables or .env file.")]
    Config(String),

    /// JSON output failed
    #[error("Failed to serialize JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
