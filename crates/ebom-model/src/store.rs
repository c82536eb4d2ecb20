//! Immutable in-memory holder of the loaded relations.

use crate::rows::{PartSpecRow, PartsListRow, StructureRow};
use crate::schema::SchemaConfig;

/// The three relations of a loaded dataset.
///
/// Built once per session start and never mutated afterwards, so it can be
/// shared read-only between sessions behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct TableStore {
    schema: SchemaConfig,
    structure: Vec<StructureRow>,
    parts_list: Vec<PartsListRow>,
    part_specs: Vec<PartSpecRow>,
}

/// Row counts per relation, for load logging and summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreSummary {
    pub structure_rows: usize,
    pub parts_list_rows: usize,
    pub part_spec_rows: usize,
}

impl TableStore {
    pub fn new(
        schema: SchemaConfig,
        structure: Vec<StructureRow>,
        parts_list: Vec<PartsListRow>,
        part_specs: Vec<PartSpecRow>,
    ) -> Self {
        Self {
            schema,
            structure,
            parts_list,
            part_specs,
        }
    }

    pub fn schema(&self) -> &SchemaConfig {
        &self.schema
    }

    pub fn root(&self) -> &str {
        &self.schema.root
    }

    pub fn structure(&self) -> &[StructureRow] {
        &self.structure
    }

    pub fn parts_list(&self) -> &[PartsListRow] {
        &self.parts_list
    }

    pub fn part_specs(&self) -> &[PartSpecRow] {
        &self.part_specs
    }

    pub fn summary(&self) -> StoreSummary {
        StoreSummary {
            structure_rows: self.structure.len(),
            parts_list_rows: self.parts_list.len(),
            part_spec_rows: self.part_specs.len(),
        }
    }
}
