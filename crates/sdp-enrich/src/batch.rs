//! Batch enrichment run
//!
//! Load → deduplicate → enrich → save. The enriched file is only written
//! after the full pass completes, so an interrupted run leaves the output
//! untouched.

use crate::gbif::{CommonNameResolver, GbifClient, DEFAULT_GBIF_BASE_URL};
use crate::pipeline::EnrichmentPipeline;
use anyhow::{Context, Result};
use sdp_common::dataset::Dataset;
use sdp_common::dedup::deduplicate;
use tracing::info;

/// Run the full enrichment pass over a CSV dataset against the GBIF API.
///
/// A missing input file is the one fatal condition: it is reported before
/// any work is done. Individual lookup failures never fail the run.
pub async fn run(
    input: &str,
    output: &str,
    workers: usize,
    gbif_url: Option<&str>,
) -> Result<()> {
    let client = GbifClient::new(gbif_url.unwrap_or(DEFAULT_GBIF_BASE_URL))?;
    run_with_resolver(&client, input, output, workers, true).await
}

/// Same as [`run`] but with an injected resolver, used by tests.
pub async fn run_with_resolver(
    resolver: &dyn CommonNameResolver,
    input: &str,
    output: &str,
    workers: usize,
    show_progress: bool,
) -> Result<()> {
    let mut dataset = Dataset::load(input)
        .with_context(|| format!("Cannot read input dataset '{}'", input))?;

    let initial_count = dataset.records.len();
    dataset.records = deduplicate(dataset.records);
    info!(
        before = initial_count,
        after = dataset.records.len(),
        "Deduplicated dataset"
    );

    let pipeline = EnrichmentPipeline::new(resolver, workers).with_progress(show_progress);
    dataset.records = pipeline.enrich(dataset.records).await;

    dataset
        .save(output)
        .with_context(|| format!("Cannot write enriched dataset '{}'", output))?;
    info!(output = %output, "Enriched dataset written");

    Ok(())
}
