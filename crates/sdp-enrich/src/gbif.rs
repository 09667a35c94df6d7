//! GBIF backbone name resolution
//!
//! Resolves a scientific name to an English common name with the GBIF
//! species API: match the name to a backbone usage key, then scan that
//! taxon's vernacular names for the first English entry.
//!
//! Resolution is total by contract. Candidate names are tried in a fixed
//! order (English vernacular entry, then the match response's own name) and
//! the first non-empty one wins; any network, timeout, or parse failure at
//! any step degrades to the input scientific name.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Public GBIF API root.
pub const DEFAULT_GBIF_BASE_URL: &str = "https://api.gbif.org";

/// Per-request timeout in seconds. The backbone is fast; a slow answer is
/// treated the same as no answer.
pub const GBIF_TIMEOUT_SECS: u64 = 5;

/// Language tag GBIF uses for English vernacular entries.
const ENGLISH: &str = "eng";

/// Seam between the enrichment pipeline and the name lookup backend.
///
/// Implementations must be total: always return a usable, non-empty name,
/// falling back to the input when resolution fails.
#[async_trait]
pub trait CommonNameResolver: Send + Sync {
    /// Resolve a scientific name to the best available common name.
    async fn resolve(&self, scientific_name: &str) -> String;
}

/// Response of `species/match`.
#[derive(Debug, Deserialize)]
struct MatchResponse {
    #[serde(rename = "usageKey")]
    usage_key: Option<i64>,
    #[serde(rename = "vernacularName")]
    vernacular_name: Option<String>,
}

/// Response of `species/{key}/vernacularNames`.
#[derive(Debug, Deserialize)]
struct VernacularNamesResponse {
    #[serde(default)]
    results: Vec<VernacularNameEntry>,
}

#[derive(Debug, Deserialize)]
struct VernacularNameEntry {
    #[serde(default)]
    language: String,
    #[serde(rename = "vernacularName", default)]
    vernacular_name: String,
}

/// Build the name-match URL.
pub fn species_match_url(base_url: &str, name: &str) -> String {
    format!(
        "{}/v1/species/match?name={}",
        base_url,
        urlencoding::encode(name)
    )
}

/// Build the vernacular-names URL for a backbone usage key.
pub fn vernacular_names_url(base_url: &str, usage_key: i64) -> String {
    format!("{}/v1/species/{}/vernacularNames", base_url, usage_key)
}

/// Client for the GBIF species API.
pub struct GbifClient {
    client: Client,
    base_url: String,
}

impl GbifClient {
    /// Create a client against the given API root.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(GBIF_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Create a client against the public GBIF API.
    pub fn public() -> Result<Self> {
        Self::new(DEFAULT_GBIF_BASE_URL)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fallible resolution chain; `resolve` catches everything this returns.
    async fn lookup(&self, scientific_name: &str) -> Result<Option<String>> {
        let matched = self.match_name(scientific_name).await?;

        // Candidate names in priority order; first non-empty wins
        let english = match matched.usage_key {
            Some(key) => self.first_english_vernacular(key).await?,
            None => None,
        };
        let backbone = matched
            .vernacular_name
            .filter(|name| !name.trim().is_empty());

        Ok([english, backbone].into_iter().flatten().next())
    }

    async fn match_name(&self, scientific_name: &str) -> Result<MatchResponse> {
        let url = species_match_url(&self.base_url, scientific_name);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    /// First English entry in the taxon's vernacular-name list, title-cased.
    /// The list is scanned in response order.
    async fn first_english_vernacular(&self, usage_key: i64) -> Result<Option<String>> {
        let url = vernacular_names_url(&self.base_url, usage_key);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let names: VernacularNamesResponse = response.json().await?;

        Ok(names
            .results
            .iter()
            .find(|entry| entry.language == ENGLISH && !entry.vernacular_name.trim().is_empty())
            .map(|entry| title_case(&entry.vernacular_name)))
    }
}

#[async_trait]
impl CommonNameResolver for GbifClient {
    async fn resolve(&self, scientific_name: &str) -> String {
        match self.lookup(scientific_name).await {
            Ok(Some(name)) => name,
            Ok(None) => scientific_name.to_string(),
            Err(error) => {
                debug!(
                    scientific_name = %scientific_name,
                    error = %error,
                    "Name resolution failed, keeping scientific name"
                );
                scientific_name.to_string()
            },
        }
    }
}

/// Title-case a name: uppercase each letter that starts a word, lowercase
/// the rest. Any non-alphabetic character ends a word.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;

    for ch in name.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }

    out
}
