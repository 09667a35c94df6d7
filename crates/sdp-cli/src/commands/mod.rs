//! CLI command implementations

pub mod search;
pub mod show;

use crate::config::Config;
use crate::error::{CliError, Result};
use sdp_common::dataset::Dataset;
use sdp_common::dedup::deduplicate;
use sdp_common::SdpError;

/// Load the configured dataset and drop duplicate taxa.
pub(crate) fn load_dataset(config: &Config) -> Result<Dataset> {
    let mut dataset = match Dataset::load(&config.dataset) {
        Ok(dataset) => dataset,
        Err(SdpError::DatasetNotFound(path)) => return Err(CliError::DatasetNotFound(path)),
        Err(error) => return Err(error.into()),
    };

    dataset.records = deduplicate(dataset.records);
    Ok(dataset)
}
