//! Spreadsheet workbooks holding one sheet per relation.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use calamine::{Data, Reader, Sheets, open_workbook_auto};

use crate::discovery::relation_key;
use crate::error::{IngestError, Result};
use crate::table::SourceTable;

/// File extensions opened as workbooks instead of CSV directories.
pub const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

pub fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            WORKBOOK_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// An open workbook whose sheet names are matched to relations the same way
/// CSV file stems are.
pub struct Workbook {
    path: PathBuf,
    sheets: Sheets<BufReader<File>>,
}

impl Workbook {
    pub fn open(path: &Path) -> Result<Self> {
        let sheets = open_workbook_auto(path).map_err(|source| IngestError::WorkbookRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            sheets,
        })
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    /// Read the sheet named by `relation` into a table.
    pub fn read_relation(&mut self, relation: &str) -> Result<SourceTable> {
        let wanted = relation_key(relation);
        let Some(sheet) = self
            .sheet_names()
            .into_iter()
            .find(|name| relation_key(name) == wanted)
        else {
            return Err(IngestError::MissingRelation {
                relation: relation.to_string(),
                location: self.path.clone(),
            });
        };
        let range = self
            .sheets
            .worksheet_range(&sheet)
            .map_err(|source| IngestError::WorkbookRead {
                path: self.path.clone(),
                source,
            })?;
        let records = range
            .rows()
            .map(|row| row.iter().map(cell_text).collect::<Vec<_>>());
        SourceTable::from_records(format!("{} [{sheet}]", self.path.display()), records)
    }
}

// Error cells (#N/A and friends) read as blanks.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        other => other.to_string(),
    }
}
