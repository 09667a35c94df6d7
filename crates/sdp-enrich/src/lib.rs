//! SDP Enrich Library
//!
//! Offline batch enrichment of a regional species dataset: resolves common
//! (vernacular) names for every species through the GBIF backbone and writes
//! an enriched copy of the dataset.
//!
//! # Example
//!
//! ```no_run
//! use sdp_enrich::batch;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     batch::run("species.csv", "species_enriched.csv", 20, None).await?;
//!     Ok(())
//! }
//! ```

pub mod batch;
pub mod gbif;
pub mod pipeline;
