//! EBOM data ingestion.
//!
//! Loads the Structure, Parts List and Parts relations into an immutable
//! [`TableStore`](ebom_model::TableStore), either from a directory of UTF-8
//! CSV files or from a spreadsheet workbook with one sheet per relation.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use ebom_ingest::load_table_store;
//! use ebom_model::SchemaConfig;
//!
//! let store = load_table_store(Path::new("data"), &SchemaConfig::default())?;
//! println!("{} structure rows", store.structure().len());
//! ```

mod csv_table;
mod discovery;
mod error;
mod loader;
mod table;
mod workbook;

pub use csv_table::read_csv_table;
pub use discovery::{find_relation_file, list_csv_files, relation_key};
pub use error::{IngestError, Result};
pub use loader::{
    load_schema_config, load_table_store, part_spec_rows, parts_list_rows, structure_rows,
};
pub use table::SourceTable;
pub use workbook::{WORKBOOK_EXTENSIONS, Workbook, is_workbook};
