//! Loads company records from a directory CSV export.

mod normalizer;
mod parser;

use crate::scoring::CompanyRecord;
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug)]
pub enum DirectoryImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for DirectoryImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectoryImportError::Io(err) => {
                write!(f, "failed to read company directory export: {}", err)
            }
            DirectoryImportError::Csv(err) => {
                write!(f, "invalid company directory CSV data: {}", err)
            }
        }
    }
}

impl std::error::Error for DirectoryImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DirectoryImportError::Io(err) => Some(err),
            DirectoryImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for DirectoryImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for DirectoryImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct CompanyDirectoryImporter;

impl CompanyDirectoryImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<CompanyRecord>, DirectoryImportError> {
        let file = std::fs::File::open(path.as_ref())?;
        let records = Self::from_reader(file)?;
        info!(
            path = %path.as_ref().display(),
            companies = records.len(),
            "loaded company directory export"
        );
        Ok(records)
    }

    /// Headers are matched case-insensitively; rows without a name are skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<CompanyRecord>, DirectoryImportError> {
        Ok(parser::parse_records(reader)?)
    }
}
