//! API endpoint URL builders
//!
//! Helper functions to construct external API endpoint URLs.

/// Build the Red List taxon-by-scientific-name URL.
///
/// The name is trimmed and percent-encoded: "Panthera leo" becomes
/// "Panthera%20leo".
pub fn taxon_by_name_url(base_url: &str, scientific_name: &str) -> String {
    format!(
        "{}/api/v4/taxa/scientific_name/{}",
        base_url,
        urlencoding::encode(scientific_name.trim())
    )
}

/// Build the Red List assessment-detail URL.
pub fn assessment_url(base_url: &str, assessment_id: i64) -> String {
    format!("{}/api/v4/assessment/{}", base_url, assessment_id)
}

/// Build the encyclopedia page-summary URL for a species name.
///
/// Page titles use underscores instead of spaces.
pub fn page_summary_url(base_url: &str, title: &str) -> String {
    let title = title.trim().replace(' ', "_");
    format!(
        "{}/api/rest_v1/page/summary/{}",
        base_url,
        urlencoding::encode(&title)
    )
}
