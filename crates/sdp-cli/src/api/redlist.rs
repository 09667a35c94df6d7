//! IUCN Red List threat lookup
//!
//! Resolves a scientific name to a display-ready list of threat categories:
//! taxon lookup by name, selection of the assessment flagged latest, then
//! threat extraction from the assessment detail.
//!
//! The lookup is total. Each miss along the chain has its own fixed fallback
//! message, and any transport or parse failure is converted to a
//! connection-error message rather than propagated.

use crate::api::endpoints;
use crate::api::types::{AssessmentDetail, TaxonResponse};
use anyhow::Result;
use reqwest::Client;
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::debug;

/// Per-request timeout in seconds.
pub const REDLIST_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Fallback messages
// ============================================================================
// One constant per miss, used both for producing the message and for any
// comparison against it.

/// The taxon is unknown to the Red List.
pub const NOT_EVALUATED: &str = "Species not found (Not Evaluated by IUCN).";

/// The taxon exists but no assessment is flagged as latest.
pub const NO_RECENT_ASSESSMENT: &str = "No recent IUCN assessment available.";

/// The latest assessment carries no threat entries.
pub const NO_THREATS_CATALOGED: &str =
    "No specific threats cataloged in the current assessment.";

/// Client for the Red List v4 API.
pub struct RedListClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl RedListClient {
    /// Create a client against the given API root with an optional bearer
    /// token (the API rejects unauthenticated calls, which surfaces as the
    /// not-evaluated fallback).
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REDLIST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            token,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up the known threats for a species.
    ///
    /// Returns either a comma-joined, deduplicated, lexicographically sorted
    /// list of threat titles or one of the fixed fallback messages. Never
    /// fails.
    pub async fn threats(&self, scientific_name: &str) -> String {
        match self.lookup_threats(scientific_name).await {
            Ok(message) => message,
            Err(error) => {
                debug!(
                    scientific_name = %scientific_name,
                    error = %error,
                    "Threat lookup failed"
                );
                format!("Connection error: {}", error)
            },
        }
    }

    async fn lookup_threats(&self, scientific_name: &str) -> Result<String> {
        let url = endpoints::taxon_by_name_url(&self.base_url, scientific_name);
        let response = self.authorized(self.client.get(&url)).send().await?;

        if !response.status().is_success() {
            debug!(
                scientific_name = %scientific_name,
                status = %response.status(),
                "Taxon not found on the Red List"
            );
            return Ok(NOT_EVALUATED.to_string());
        }

        let taxon: TaxonResponse = response.json().await?;
        let Some(latest) = taxon.assessments.iter().find(|a| a.latest) else {
            return Ok(NO_RECENT_ASSESSMENT.to_string());
        };

        let url = endpoints::assessment_url(&self.base_url, latest.assessment_id);
        let response = self.authorized(self.client.get(&url)).send().await?;

        if response.status().is_success() {
            let detail: AssessmentDetail = response.json().await?;
            let titles: BTreeSet<String> = detail
                .threats
                .into_iter()
                .filter_map(|t| t.title)
                .filter(|title| !title.trim().is_empty())
                .collect();

            if !titles.is_empty() {
                return Ok(titles.into_iter().collect::<Vec<_>>().join(", "));
            }
        }

        Ok(NO_THREATS_CATALOGED.to_string())
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request.header("Accept", "application/json");
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn taxon_body(assessments: serde_json::Value) -> serde_json::Value {
        serde_json::json!({ "assessments": assessments })
    }

    async fn client_for(server: &MockServer) -> RedListClient {
        RedListClient::new(server.uri(), Some("test-token".to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_threats_sorted_deduplicated_joined() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v4/taxa/scientific_name/Loxodonta%20africana"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(taxon_body(
                serde_json::json!([
                    { "assessment_id": 10, "latest": false },
                    { "assessment_id": 11, "latest": true }
                ]),
            )))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v4/assessment/11"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "threats": [
                    { "title": "Poaching" },
                    { "title": "Habitat Loss" },
                    { "title": "Habitat Loss" },
                    { "title": null },
                    { "title": "" }
                ]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let threats = client.threats("Loxodonta africana").await;
        assert_eq!(threats, "Habitat Loss, Poaching");
    }

    #[tokio::test]
    async fn test_unknown_taxon_is_not_evaluated() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        assert_eq!(client.threats("Pedaria durandi").await, NOT_EVALUATED);
    }

    #[tokio::test]
    async fn test_no_latest_assessment() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(taxon_body(
                serde_json::json!([
                    { "assessment_id": 1, "latest": false },
                    { "assessment_id": 2, "latest": false }
                ]),
            )))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        assert_eq!(
            client.threats("Diplodus cervinus").await,
            NO_RECENT_ASSESSMENT
        );
    }

    #[tokio::test]
    async fn test_empty_threat_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v4/taxa/scientific_name/Chamaeleo%20africanus"))
            .respond_with(ResponseTemplate::new(200).set_body_json(taxon_body(
                serde_json::json!([{ "assessment_id": 5, "latest": true }]),
            )))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v4/assessment/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "threats": []
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        assert_eq!(
            client.threats("Chamaeleo africanus").await,
            NO_THREATS_CATALOGED
        );
    }

    #[tokio::test]
    async fn test_failed_detail_fetch_falls_back_to_no_threats() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v4/taxa/scientific_name/Hexanchus%20griseus"))
            .respond_with(ResponseTemplate::new(200).set_body_json(taxon_body(
                serde_json::json!([{ "assessment_id": 7, "latest": true }]),
            )))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v4/assessment/7"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        assert_eq!(
            client.threats("Hexanchus griseus").await,
            NO_THREATS_CATALOGED
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_reports_connection_error() {
        let client = RedListClient::new("http://127.0.0.1:9", None).unwrap();
        let message = client.threats("Panthera leo").await;
        assert!(message.starts_with("Connection error: "), "got: {}", message);
    }
}
