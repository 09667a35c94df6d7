//! Species dataset CSV I/O
//!
//! Reads and writes the tabular species dataset. Only the four well-known
//! columns are interpreted; every other column is carried through verbatim so
//! that enrichment never loses data, and the output keeps the input's column
//! order.

use crate::error::{Result, SdpError};
use crate::species::SpeciesRecord;
use std::path::Path;
use tracing::{debug, info};

/// Column holding the scientific name (required).
pub const SCIENTIFIC_NAME_COLUMN: &str = "Scientific Name";

/// Column holding the resolved common name (optional on input).
pub const COMMON_NAME_COLUMN: &str = "Common Name";

/// Column holding the taxonomic class (optional).
pub const CLASS_COLUMN: &str = "Class";

/// Column holding the conservation-status code (optional).
pub const CATEGORY_COLUMN: &str = "Category";

/// An in-memory species dataset plus the header order it was read with.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Original column order, used to round-trip passthrough columns
    pub headers: Vec<String>,
    /// One record per input row
    pub records: Vec<SpeciesRecord>,
}

impl Dataset {
    /// Load a dataset from a CSV file.
    ///
    /// Fails if the file is missing or has no scientific-name column. An
    /// empty common-name cell is read as `None`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SdpError::DatasetNotFound(path.display().to_string()));
        }

        let mut reader = csv::Reader::from_path(path)?;
        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        if !headers.iter().any(|h| h == SCIENTIFIC_NAME_COLUMN) {
            return Err(SdpError::MissingColumn(SCIENTIFIC_NAME_COLUMN.to_string()));
        }

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            records.push(record_from_row(&headers, &row));
        }

        info!(
            path = %path.display(),
            rows = records.len(),
            columns = headers.len(),
            "Loaded species dataset"
        );

        Ok(Self { headers, records })
    }

    /// Write the dataset to a CSV file.
    ///
    /// Column order matches the input headers; a common-name column is
    /// appended if the input did not have one. Unresolved common names are
    /// written as empty cells.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let mut headers = self.headers.clone();
        if !headers.iter().any(|h| h == COMMON_NAME_COLUMN) {
            headers.push(COMMON_NAME_COLUMN.to_string());
        }

        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&headers)?;

        for record in &self.records {
            let row: Vec<&str> = headers.iter().map(|h| field_for(record, h)).collect();
            writer.write_record(&row)?;
        }
        writer.flush()?;

        debug!(path = %path.display(), rows = self.records.len(), "Wrote species dataset");
        Ok(())
    }

    /// Find a record by scientific name, matching case-insensitively.
    pub fn find(&self, scientific_name: &str) -> Option<&SpeciesRecord> {
        let wanted = scientific_name.trim();
        self.records
            .iter()
            .find(|r| r.scientific_name.eq_ignore_ascii_case(wanted))
    }
}

fn record_from_row(headers: &[String], row: &csv::StringRecord) -> SpeciesRecord {
    let mut record = SpeciesRecord::new("");

    for (header, value) in headers.iter().zip(row.iter()) {
        match header.as_str() {
            SCIENTIFIC_NAME_COLUMN => record.scientific_name = value.trim().to_string(),
            COMMON_NAME_COLUMN => {
                let value = value.trim();
                if !value.is_empty() {
                    record.common_name = Some(value.to_string());
                }
            },
            CLASS_COLUMN => record.class = value.trim().to_string(),
            CATEGORY_COLUMN => record.category = value.trim().to_string(),
            _ => record.extra.push((header.clone(), value.to_string())),
        }
    }

    record
}

fn field_for<'a>(record: &'a SpeciesRecord, header: &str) -> &'a str {
    match header {
        SCIENTIFIC_NAME_COLUMN => &record.scientific_name,
        COMMON_NAME_COLUMN => record.common_name.as_deref().unwrap_or(""),
        CLASS_COLUMN => &record.class,
        CATEGORY_COLUMN => &record.category,
        _ => record
            .extra
            .iter()
            .find(|(name, _)| name == header)
            .map(|(_, value)| value.as_str())
            .unwrap_or(""),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = "\
Scientific Name,Class,Category,Assessment Year
Hexanchus griseus,CHONDRICHTHYES,NT,2019
Loxodonta africana,MAMMALIA,EN,2021
";

    #[test]
    fn test_load_missing_file() {
        let err = Dataset::load("/nonexistent/species.csv").unwrap_err();
        assert!(matches!(err, SdpError::DatasetNotFound(_)));
    }

    #[test]
    fn test_load_missing_key_column() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "Name,Category\nLion,VU\n").unwrap();

        let err = Dataset::load(&path).unwrap_err();
        assert!(matches!(err, SdpError::MissingColumn(_)));
    }

    #[test]
    fn test_load_parses_known_and_passthrough_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("species.csv");
        std::fs::write(&path, SAMPLE).unwrap();

        let dataset = Dataset::load(&path).unwrap();
        assert_eq!(dataset.records.len(), 2);

        let shark = &dataset.records[0];
        assert_eq!(shark.scientific_name, "Hexanchus griseus");
        assert_eq!(shark.common_name, None);
        assert_eq!(shark.class, "CHONDRICHTHYES");
        assert_eq!(shark.category, "NT");
        assert_eq!(
            shark.extra,
            vec![("Assessment Year".to_string(), "2019".to_string())]
        );
    }

    #[test]
    fn test_save_appends_common_name_column() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        std::fs::write(&input, SAMPLE).unwrap();

        let mut dataset = Dataset::load(&input).unwrap();
        dataset.records[0].common_name = Some("Bluntnose Sixgill Shark".to_string());
        dataset.save(&output).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        let mut lines = written.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Scientific Name,Class,Category,Assessment Year,Common Name"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Hexanchus griseus,CHONDRICHTHYES,NT,2019,Bluntnose Sixgill Shark"
        );
        // Unresolved name stays an empty cell
        assert_eq!(lines.next().unwrap(), "Loxodonta africana,MAMMALIA,EN,2021,");
    }

    #[test]
    fn test_roundtrip_preserves_existing_common_name_column() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        std::fs::write(
            &input,
            "Scientific Name,Common Name,Category\nPanthera leo,Lion,VU\n",
        )
        .unwrap();

        let dataset = Dataset::load(&input).unwrap();
        dataset.save(&output).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(
            written,
            "Scientific Name,Common Name,Category\nPanthera leo,Lion,VU\n"
        );
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("species.csv");
        std::fs::write(&path, SAMPLE).unwrap();

        let dataset = Dataset::load(&path).unwrap();
        assert!(dataset.find("hexanchus GRISEUS").is_some());
        assert!(dataset.find("  Loxodonta africana ").is_some());
        assert!(dataset.find("Panthera leo").is_none());
    }
}
