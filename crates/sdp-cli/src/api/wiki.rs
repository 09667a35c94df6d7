//! Encyclopedia summary lookup
//!
//! Fetches a short free-text species overview from the Wikipedia REST
//! page-summary endpoint. Total: any miss or failure yields a fixed
//! fallback sentence.

use crate::api::endpoints;
use crate::api::types::PageSummary;
use anyhow::Result;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Per-request timeout in seconds.
pub const WIKI_TIMEOUT_SECS: u64 = 10;

/// Shown when no summary can be fetched.
pub const SUMMARY_UNAVAILABLE: &str =
    "Biological profile: further field data is being compiled for this record.";

/// Client for the encyclopedia summary API.
pub struct WikiClient {
    client: Client,
    base_url: String,
}

impl WikiClient {
    /// Create a client against the given API root.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(WIKI_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a short summary for a species name. Never fails.
    pub async fn summary(&self, scientific_name: &str) -> String {
        match self.fetch_summary(scientific_name).await {
            Ok(Some(extract)) => extract,
            Ok(None) => SUMMARY_UNAVAILABLE.to_string(),
            Err(error) => {
                debug!(
                    scientific_name = %scientific_name,
                    error = %error,
                    "Summary lookup failed"
                );
                SUMMARY_UNAVAILABLE.to_string()
            },
        }
    }

    async fn fetch_summary(&self, scientific_name: &str) -> Result<Option<String>> {
        let url = endpoints::page_summary_url(&self.base_url, scientific_name);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let summary: PageSummary = response.json().await?;
        let extract = summary.extract.trim().to_string();
        Ok(if extract.is_empty() { None } else { Some(extract) })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_summary_returns_extract() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/rest_v1/page/summary/Hexanchus_griseus"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "title": "Hexanchus griseus",
                "extract": "The bluntnose sixgill shark is a deepwater shark."
            })))
            .mount(&server)
            .await;

        let client = WikiClient::new(server.uri()).unwrap();
        let summary = client.summary("Hexanchus griseus").await;
        assert_eq!(summary, "The bluntnose sixgill shark is a deepwater shark.");
    }

    #[tokio::test]
    async fn test_missing_page_falls_back() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = WikiClient::new(server.uri()).unwrap();
        assert_eq!(client.summary("Pedaria durandi").await, SUMMARY_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_unreachable_server_falls_back() {
        let client = WikiClient::new("http://127.0.0.1:9").unwrap();
        assert_eq!(client.summary("Panthera leo").await, SUMMARY_UNAVAILABLE);
    }
}
