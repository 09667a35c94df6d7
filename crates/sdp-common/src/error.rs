//! Error types for SDP

use thiserror::Error;

/// Result type alias for SDP operations
pub type Result<T> = std::result::Result<T, SdpError>;

/// Main error type for SDP
#[derive(Error, Debug)]
pub enum SdpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    #[error("Missing column in dataset: {0}")]
    MissingColumn(String),

    #[error("Species not found: {0}")]
    SpeciesNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
