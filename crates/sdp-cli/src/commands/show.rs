//! Show command implementation
//!
//! Detail view for a single species: Red List status, taxonomic group,
//! known threats, and an encyclopedia overview. The two external lookups
//! are memoized per scientific name for the life of the process, so
//! re-viewing a species while browsing interactively is free.

use crate::api::redlist::RedListClient;
use crate::api::wiki::WikiClient;
use crate::cache::LookupCache;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::progress::create_spinner;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};
use sdp_common::species::{class_group, status_label, AlertTier, Category, SpeciesRecord};
use tracing::debug;

/// Lookup clients plus their per-process caches.
pub struct DetailContext {
    redlist: RedListClient,
    wiki: WikiClient,
    threats_cache: LookupCache,
    summary_cache: LookupCache,
}

impl DetailContext {
    /// Build the lookup context from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            redlist: RedListClient::new(&config.redlist_url, config.redlist_token.clone())?,
            wiki: WikiClient::new(&config.wiki_url)?,
            threats_cache: LookupCache::new(),
            summary_cache: LookupCache::new(),
        })
    }

    /// Known threats for a species, cached.
    pub async fn threats(&self, scientific_name: &str) -> String {
        self.threats_cache
            .get_or_insert_with(scientific_name, || self.redlist.threats(scientific_name))
            .await
    }

    /// Encyclopedia overview for a species, cached.
    pub async fn summary(&self, scientific_name: &str) -> String {
        self.summary_cache
            .get_or_insert_with(scientific_name, || self.wiki.summary(scientific_name))
            .await
    }
}

/// Run the show command
pub async fn run(name: Vec<String>, config: &Config) -> Result<()> {
    let name = name.join(" ");
    if name.trim().is_empty() {
        return Err(CliError::config("Species name cannot be empty"));
    }

    let dataset = super::load_dataset(config)?;
    let record = dataset
        .find(&name)
        .or_else(|| {
            // Fall back to common-name matching
            let wanted = name.trim();
            dataset.records.iter().find(|r| {
                r.common_name
                    .as_deref()
                    .is_some_and(|c| c.eq_ignore_ascii_case(wanted))
            })
        })
        .ok_or_else(|| CliError::SpeciesNotFound(name.clone()))?
        .clone();

    let context = DetailContext::new(config)?;
    render_detail(&record, &context).await;

    let stats = context.threats_cache.stats();
    debug!(entries = stats.entries, "Lookup cache after show");
    Ok(())
}

/// Render the full detail view for a record.
pub async fn render_detail(record: &SpeciesRecord, context: &DetailContext) {
    let spinner = create_spinner("Fetching conservation data...");
    let threats = context.threats(&record.scientific_name).await;
    let summary = context.summary(&record.scientific_name).await;
    spinner.finish_and_clear();

    println!();
    println!("{}", record.display_title().bold());
    if record.has_common_name() {
        println!("{}", record.scientific_name.italic());
    }
    println!();

    println!("{}", format_status_line(&record.category));
    if !record.class.is_empty() {
        println!("Group: {}", class_group(&record.class));
    }
    println!("Known threats: {}", threats);
    println!();

    println!("{}", "Species overview".bold());
    println!("{}", summary);
    println!();

    print_metadata(record);
}

/// Status line colored by severity tier.
fn format_status_line(category_code: &str) -> String {
    let label = status_label(category_code);
    let line = format!("Red List status: {}", label);

    match Category::from_code(category_code).map(|c| c.tier()) {
        Some(AlertTier::Critical) => line.red().bold().to_string(),
        Some(AlertTier::Elevated) => line.yellow().to_string(),
        Some(AlertTier::Stable) => line.green().to_string(),
        None => line,
    }
}

fn print_metadata(record: &SpeciesRecord) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS);

    table.add_row(vec!["Scientific Name", &record.scientific_name]);
    if let Some(ref common) = record.common_name {
        table.add_row(vec!["Common Name", common]);
    }
    if !record.class.is_empty() {
        table.add_row(vec!["Class", &record.class]);
    }
    if !record.category.is_empty() {
        table.add_row(vec!["Category", &record.category]);
    }
    for (column, value) in &record.extra {
        table.add_row(vec![column, value]);
    }

    println!("{}", table);
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> Config {
        Config {
            dataset: "unused.csv".to_string(),
            redlist_token: Some("token".to_string()),
            redlist_url: server.uri(),
            wiki_url: server.uri(),
        }
    }

    #[test]
    fn test_format_status_line_unknown_code_uncolored() {
        let line = format_status_line("??");
        assert_eq!(line, "Red List status: ??");
    }

    #[tokio::test]
    async fn test_context_memoizes_lookups() {
        let server = MockServer::start().await;

        // Every taxon lookup 404s: first call misses cache, hits network
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .expect(2) // one threats call + one summary call in total
            .mount(&server)
            .await;

        let context = DetailContext::new(&config_for(&server)).unwrap();

        let first = context.threats("Panthera leo").await;
        let second = context.threats("Panthera leo").await;
        assert_eq!(first, second);

        let first = context.summary("Panthera leo").await;
        let second = context.summary("Panthera leo").await;
        assert_eq!(first, second);

        assert_eq!(context.threats_cache.stats().hits, 1);
        assert_eq!(context.summary_cache.stats().hits, 1);
    }
}
