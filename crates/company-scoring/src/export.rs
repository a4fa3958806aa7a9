//! Ranked CSV snapshot used to fix export row ordering.

use crate::scoring::{CriterionKey, RankedResult};
use std::io::Write;
use std::path::Path;

#[derive(Debug)]
pub enum ExportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(err) => write!(f, "failed to write ranked export: {}", err),
            ExportError::Csv(err) => write!(f, "failed to encode ranked export: {}", err),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(err) => Some(err),
            ExportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct RankedExportWriter;

impl RankedExportWriter {
    pub fn to_path<P: AsRef<Path>>(result: &RankedResult<'_>, path: P) -> Result<(), ExportError> {
        let file = std::fs::File::create(path)?;
        Self::to_writer(result, file)
    }

    /// Writes one row per entry in rank order, with a `<key>_matched` column
    /// for every active criterion.
    pub fn to_writer<W: Write>(result: &RankedResult<'_>, writer: W) -> Result<(), ExportError> {
        let keys: Vec<CriterionKey> = result
            .criteria
            .criteria
            .iter()
            .map(|criterion| criterion.key)
            .collect();

        let mut csv_writer = csv::Writer::from_writer(writer);

        let mut header = vec![
            "rank".to_string(),
            "id".to_string(),
            "name".to_string(),
            "normalized_score".to_string(),
            "raw_score".to_string(),
            "max_possible_score".to_string(),
        ];
        header.extend(keys.iter().map(|key| format!("{}_matched", key.as_str())));
        csv_writer.write_record(&header)?;

        for entry in &result.entries {
            let mut row = vec![
                entry.rank.to_string(),
                entry.company.id.to_string(),
                entry.company.name.clone(),
                entry.breakdown.normalized_score.to_string(),
                entry.breakdown.raw_score.to_string(),
                entry.breakdown.max_possible_score.to_string(),
            ];
            row.extend(
                keys.iter()
                    .map(|key| entry.breakdown.matched(*key).to_string()),
            );
            csv_writer.write_record(&row)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
