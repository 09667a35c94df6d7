//! Dataset deduplication
//!
//! Regional species datasets routinely contain the same taxon more than once
//! (one row per assessment or per sub-population). Downstream lookups key on
//! the scientific name, so each name must appear at most once.

use crate::species::SpeciesRecord;
use std::collections::HashSet;

/// Remove duplicate records keyed by exact scientific name.
///
/// The first occurrence of each name wins and fields are never merged across
/// duplicates. Relative order of first occurrences is preserved, which makes
/// the function idempotent.
pub fn deduplicate(records: Vec<SpeciesRecord>) -> Vec<SpeciesRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(record.scientific_name.clone()))
        .collect()
}
