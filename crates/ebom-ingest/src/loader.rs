//! Builds a [`TableStore`] from a directory of relation CSV files or from a
//! workbook with one sheet per relation.

use std::path::Path;

use ebom_model::{PartSpecRow, PartsListRow, SchemaConfig, StructureRow, TableStore};
use tracing::{debug, info, info_span};

use crate::csv_table::read_csv_table;
use crate::discovery::{find_relation_file, list_csv_files};
use crate::error::{IngestError, Result};
use crate::table::SourceTable;
use crate::workbook::{Workbook, is_workbook};

/// Load the three relations from `source` using the names in `schema`.
///
/// `source` is either a workbook (chosen by extension, see
/// [`WORKBOOK_EXTENSIONS`](crate::WORKBOOK_EXTENSIONS)) or a directory of
/// CSV files. Blank and NaN-like cells are normalized to absent values. Any
/// missing relation or key column fails the whole load.
pub fn load_table_store(source: &Path, schema: &SchemaConfig) -> Result<TableStore> {
    let span = info_span!("load", source = %source.display());
    let _guard = span.enter();

    let [structure, parts_list, part_specs] = if is_workbook(source) {
        read_workbook_relations(source, schema)?
    } else {
        read_csv_relations(source, schema)?
    };
    let structure = structure_rows(&structure, schema)?;
    let parts_list = parts_list_rows(&parts_list, schema)?;
    let part_specs = part_spec_rows(&part_specs, schema)?;

    let store = TableStore::new(schema.clone(), structure, parts_list, part_specs);
    let summary = store.summary();
    info!(
        structure_rows = summary.structure_rows,
        parts_list_rows = summary.parts_list_rows,
        part_spec_rows = summary.part_spec_rows,
        root = %schema.root,
        "loaded ebom tables"
    );
    Ok(store)
}

fn relation_names(schema: &SchemaConfig) -> [&str; 3] {
    [
        schema.structure_relation.as_str(),
        schema.parts_list_relation.as_str(),
        schema.part_specs_relation.as_str(),
    ]
}

fn read_csv_relations(dir: &Path, schema: &SchemaConfig) -> Result<[SourceTable; 3]> {
    let files = list_csv_files(dir)?;
    let [structure, parts_list, part_specs] = relation_names(schema).map(|relation| {
        find_relation_file(&files, relation).ok_or_else(|| IngestError::MissingRelation {
            relation: relation.to_string(),
            location: dir.to_path_buf(),
        })
    });
    // all three must exist before any file is parsed
    let (structure, parts_list, part_specs) = (structure?, parts_list?, part_specs?);
    Ok([
        read_csv_table(&structure)?,
        read_csv_table(&parts_list)?,
        read_csv_table(&part_specs)?,
    ])
}

fn read_workbook_relations(path: &Path, schema: &SchemaConfig) -> Result<[SourceTable; 3]> {
    let mut workbook = Workbook::open(path)?;
    debug!(sheets = ?workbook.sheet_names(), "opened workbook");
    let [structure, parts_list, part_specs] = relation_names(schema);
    Ok([
        workbook.read_relation(structure)?,
        workbook.read_relation(parts_list)?,
        workbook.read_relation(part_specs)?,
    ])
}

pub fn structure_rows(table: &SourceTable, schema: &SchemaConfig) -> Result<Vec<StructureRow>> {
    let relation = schema.structure_relation.as_str();
    let parent = table.require_column(&schema.parent_column, relation)?;
    let child = table.require_column(&schema.child_column, relation)?;
    Ok(table
        .rows
        .iter()
        .map(|row| StructureRow {
            parent_key: table.value(row, Some(parent)),
            child_key: table.value(row, Some(child)),
            attributes: table.attributes(row),
        })
        .collect())
}

pub fn parts_list_rows(table: &SourceTable, schema: &SchemaConfig) -> Result<Vec<PartsListRow>> {
    let relation = schema.parts_list_relation.as_str();
    let parent = table.require_column(&schema.parent_column, relation)?;
    let part_number = table.require_column(&schema.part_number_column, relation)?;
    let designator = table.column_index(&schema.designator_column);
    let quantity = table.column_index(&schema.quantity_column);
    if designator.is_none() || quantity.is_none() {
        debug!(
            location = %table.location,
            has_designator = designator.is_some(),
            has_quantity = quantity.is_some(),
            "parts list lacks optional columns"
        );
    }
    Ok(table
        .rows
        .iter()
        .map(|row| PartsListRow {
            parent_key: table.value(row, Some(parent)),
            part_number: table.value(row, Some(part_number)),
            designator: table.value(row, designator),
            quantity: table.value(row, quantity),
            attributes: table.attributes(row),
        })
        .collect())
}

pub fn part_spec_rows(table: &SourceTable, schema: &SchemaConfig) -> Result<Vec<PartSpecRow>> {
    let relation = schema.part_specs_relation.as_str();
    let part_number = table.require_column(&schema.part_number_column, relation)?;
    Ok(table
        .rows
        .iter()
        .map(|row| PartSpecRow {
            part_number: table.value(row, Some(part_number)),
            fields: table.attributes(row),
        })
        .collect())
}

/// Read a JSON schema config. Missing fields keep their defaults.
pub fn load_schema_config(path: &Path) -> Result<SchemaConfig> {
    let schema_error = |reason: String| IngestError::SchemaConfig {
        path: path.to_path_buf(),
        reason,
    };
    let contents = std::fs::read_to_string(path).map_err(|e| schema_error(e.to_string()))?;
    serde_json::from_str(&contents).map_err(|e| schema_error(e.to_string()))
}
