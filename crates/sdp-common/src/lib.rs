//! SDP Common Library
//!
//! Shared types and utilities for the Species Discovery Platform.
//!
//! # Overview
//!
//! This crate provides common functionality used across all SDP workspace members:
//!
//! - **Error Handling**: Custom error types and result types
//! - **Species Types**: The species record and conservation-status domain types
//! - **Deduplication**: First-seen-wins dataset deduplication
//! - **Dataset I/O**: CSV reading/writing with passthrough-column preservation
//!
//! # Example
//!
//! ```no_run
//! use sdp_common::{Result, dataset::Dataset, dedup::deduplicate};
//!
//! fn load_unique(path: &str) -> Result<Dataset> {
//!     let mut dataset = Dataset::load(path)?;
//!     dataset.records = deduplicate(dataset.records);
//!     Ok(dataset)
//! }
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod dataset;
pub mod dedup;
pub mod error;
pub mod logging;
pub mod species;

// Re-export commonly used types
pub use error::{Result, SdpError};
pub use species::{Category, SpeciesRecord};
