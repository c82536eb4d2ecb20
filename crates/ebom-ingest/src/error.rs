//! Error types for EBOM data ingestion.

use std::path::PathBuf;

use ebom_model::EbomError;
use thiserror::Error;

/// Errors that can occur while loading the EBOM dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Data directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No CSV file in the directory, or no sheet in the workbook, names the relation.
    #[error("relation '{relation}' not found in {location}")]
    MissingRelation { relation: String, location: PathBuf },

    // === CSV Errors ===
    /// Failed to open or parse a CSV file.
    #[error("failed to read CSV {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    // === Workbook Errors ===
    /// Failed to open a workbook or read one of its sheets.
    #[error("failed to read workbook {path}: {source}")]
    WorkbookRead {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    // === Table Errors ===
    /// A CSV file or sheet has no header row.
    #[error("no header row in {location}")]
    EmptyHeader { location: String },

    /// A key column required for navigation is missing.
    #[error("required column '{column}' not found in {relation} ({location})")]
    MissingColumn {
        column: String,
        relation: String,
        location: String,
    },

    // === Configuration Errors ===
    /// Schema configuration file could not be read or parsed.
    #[error("invalid schema config {path}: {reason}")]
    SchemaConfig { path: PathBuf, reason: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

impl From<IngestError> for EbomError {
    fn from(error: IngestError) -> Self {
        EbomError::data_unavailable(error.to_string())
    }
}
