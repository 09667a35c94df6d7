//! Configuration management for the SDP CLI
//!
//! Settings come from the environment (optionally via a .env file): the
//! dataset path, the Red List bearer token, and the external API base URLs
//! (overridable, which is what the tests rely on).

use crate::error::Result;
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Configuration Constants
// ============================================================================

/// Default species dataset path when not specified.
pub const DEFAULT_DATASET: &str = "species.csv";

/// Public IUCN Red List API root.
pub const DEFAULT_REDLIST_URL: &str = "https://api.iucnredlist.org";

/// Wikipedia REST API root used for encyclopedia summaries.
pub const DEFAULT_WIKI_URL: &str = "https://en.wikipedia.org";

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the species dataset CSV
    pub dataset: String,

    /// Red List API bearer token, supplied out of band
    pub redlist_token: Option<String>,

    /// Red List API base URL
    pub redlist_url: String,

    /// Encyclopedia API base URL
    pub wiki_url: String,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self {
            dataset: DEFAULT_DATASET.to_string(),
            redlist_token: None,
            redlist_url: DEFAULT_REDLIST_URL.to_string(),
            wiki_url: DEFAULT_WIKI_URL.to_string(),
        }
    }

    /// Load config from environment variables, reading a .env file first
    /// if one is present.
    ///
    /// Recognized variables: `SDP_DATASET`, `SDP_REDLIST_TOKEN`,
    /// `SDP_REDLIST_URL`, `SDP_WIKI_URL`.
    pub fn from_env() -> Result<Self> {
        // A missing .env file is fine; a malformed one is not
        match dotenvy::dotenv() {
            Ok(_) | Err(dotenvy::Error::Io(_)) => {},
            Err(e) => {
                return Err(crate::error::CliError::config(format!(
                    "Failed to read .env file: {}",
                    e
                )))
            },
        }

        let mut config = Self::new();

        if let Ok(dataset) = std::env::var("SDP_DATASET") {
            config.dataset = dataset;
        }
        if let Ok(token) = std::env::var("SDP_REDLIST_TOKEN") {
            if !token.trim().is_empty() {
                config.redlist_token = Some(token);
            }
        }
        if let Ok(url) = std::env::var("SDP_REDLIST_URL") {
            config.redlist_url = url;
        }
        if let Ok(url) = std::env::var("SDP_WIKI_URL") {
            config.wiki_url = url;
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
