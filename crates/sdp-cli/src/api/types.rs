//! External API response types
//!
//! Matches the shapes of the Red List v4 and encyclopedia summary APIs.
//! Every field the lookups do not need is simply not modeled.

use serde::Deserialize;

/// Red List taxon lookup response.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxonResponse {
    #[serde(default)]
    pub assessments: Vec<AssessmentSummary>,
}

/// One entry in a taxon's assessment history.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentSummary {
    pub assessment_id: i64,

    /// Whether this is the current assessment for the taxon
    #[serde(default)]
    pub latest: bool,
}

/// Red List assessment detail response.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentDetail {
    #[serde(default)]
    pub threats: Vec<ThreatEntry>,
}

/// A threat listed on an assessment.
#[derive(Debug, Clone, Deserialize)]
pub struct ThreatEntry {
    #[serde(default)]
    pub title: Option<String>,
}

/// Encyclopedia page-summary response.
#[derive(Debug, Clone, Deserialize)]
pub struct PageSummary {
    #[serde(default)]
    pub extract: String,
}
