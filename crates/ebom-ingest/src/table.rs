//! Header detection and column lookup shared by the CSV and workbook readers.

use std::collections::HashSet;

use ebom_model::{Attributes, Value};
use tracing::warn;

use crate::error::{IngestError, Result};

/// One relation read into memory with a normalized, unique header row.
#[derive(Debug, Clone)]
pub struct SourceTable {
    /// Where the table came from: a CSV path or `workbook [sheet]`.
    pub location: String,
    pub headers: Vec<String>,
    /// Data rows padded or cut to the header width.
    pub rows: Vec<Vec<String>>,
}

impl SourceTable {
    /// Build a table from raw records. The first non-blank record is the
    /// header; blank records are skipped everywhere.
    ///
    /// Repeated headers get `.1`, `.2` suffixes and blank headers become
    /// `Unnamed: <index>`, so no column is lost when rows become attributes.
    pub fn from_records<I>(location: impl Into<String>, records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let location = location.into();
        let mut headers: Option<Vec<String>> = None;
        let mut rows = Vec::new();
        for record in records {
            let row: Vec<String> = record.iter().map(|cell| normalize_cell(cell)).collect();
            if row.iter().all(String::is_empty) {
                continue;
            }
            match &headers {
                None => {
                    let raw = row.iter().map(|cell| normalize_header(cell)).collect();
                    headers = Some(unique_headers(&location, raw));
                }
                Some(header) => {
                    let mut padded = row;
                    padded.resize(header.len(), String::new());
                    rows.push(padded);
                }
            }
        }
        let Some(headers) = headers else {
            return Err(IngestError::EmptyHeader { location });
        };
        tracing::debug!(
            location = %location,
            columns = headers.len(),
            rows = rows.len(),
            "read source table"
        );
        Ok(Self {
            location,
            headers,
            rows,
        })
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Index of a column that must exist for `relation`.
    pub fn require_column(&self, name: &str, relation: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| IngestError::MissingColumn {
                column: name.to_string(),
                relation: relation.to_string(),
                location: self.location.clone(),
            })
    }

    /// Normalized cell at (row, column); absent when the column is missing.
    pub fn value(&self, row: &[String], column: Option<usize>) -> Value {
        column
            .and_then(|idx| row.get(idx))
            .map(|raw| Value::from_raw(raw))
            .unwrap_or_default()
    }

    /// Every column of `row` as an ordered attribute map.
    pub fn attributes(&self, row: &[String]) -> Attributes {
        self.headers
            .iter()
            .zip(row)
            .map(|(header, raw)| (header.as_str(), Value::from_raw(raw)))
            .collect()
    }
}

fn normalize_header(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn unique_headers(location: &str, raw: Vec<String>) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::new();
    let mut headers = Vec::with_capacity(raw.len());
    for (index, header) in raw.into_iter().enumerate() {
        let base = if header.is_empty() {
            format!("Unnamed: {index}")
        } else {
            header
        };
        let mut candidate = base.clone();
        let mut suffix = 1;
        while taken.contains(&candidate) {
            candidate = format!("{base}.{suffix}");
            suffix += 1;
        }
        if candidate != base {
            warn!(location, column = %base, renamed = %candidate, "duplicate column header");
        }
        taken.insert(candidate.clone());
        headers.push(candidate);
    }
    headers
}
