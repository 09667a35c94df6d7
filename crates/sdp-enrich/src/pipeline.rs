//! Bounded-parallel enrichment pipeline
//!
//! Applies common-name resolution across a dataset with a fixed number of
//! concurrent lookups. Each record is independent, so no coordination is
//! needed beyond the concurrency bound; `buffered` yields results in input
//! order regardless of completion order.

use crate::gbif::CommonNameResolver;
use futures::{stream, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use sdp_common::SpeciesRecord;
use tracing::info;

/// Default number of concurrent name lookups.
pub const DEFAULT_WORKERS: usize = 20;

/// Enrichment pipeline over a species dataset.
pub struct EnrichmentPipeline<'a> {
    resolver: &'a dyn CommonNameResolver,
    workers: usize,
    show_progress: bool,
}

impl<'a> EnrichmentPipeline<'a> {
    /// Create a pipeline with the given concurrency bound (minimum 1).
    pub fn new(resolver: &'a dyn CommonNameResolver, workers: usize) -> Self {
        Self {
            resolver,
            workers: workers.max(1),
            show_progress: false,
        }
    }

    /// Enable a terminal progress bar for the run.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Resolve a common name for every record that does not already have one.
    ///
    /// The output has the same length and order as the input; records whose
    /// common name is already set pass through untouched. The pipeline never
    /// fails as a whole: resolver failures already degrade to the scientific
    /// name inside the resolver's own contract.
    pub async fn enrich(&self, records: Vec<SpeciesRecord>) -> Vec<SpeciesRecord> {
        let total = records.len();
        let unresolved = records
            .iter()
            .filter(|r| needs_resolution(r))
            .count();

        info!(
            total = total,
            unresolved = unresolved,
            workers = self.workers,
            "Starting common-name enrichment"
        );

        let progress = if self.show_progress {
            create_enrichment_progress(total as u64)
        } else {
            ProgressBar::hidden()
        };

        let resolver = self.resolver;
        let enriched: Vec<SpeciesRecord> = stream::iter(records)
            .map(|mut record| {
                let progress = progress.clone();
                async move {
                    if needs_resolution(&record) {
                        let name = resolver.resolve(&record.scientific_name).await;
                        record.common_name = Some(name);
                    }
                    progress.inc(1);
                    record
                }
            })
            .buffered(self.workers)
            .collect()
            .await;

        progress.finish_and_clear();
        info!(total = enriched.len(), "Enrichment pass complete");

        enriched
    }
}

/// Whether a record still needs its common name resolved.
fn needs_resolution(record: &SpeciesRecord) -> bool {
    record
        .common_name
        .as_deref()
        .is_none_or(|name| name.trim().is_empty())
}

fn create_enrichment_progress(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{msg}\n{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb.set_message("Resolving common names");
    pb
}
