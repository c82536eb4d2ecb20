//! Column and relation naming for the three EBOM tables.

use serde::{Deserialize, Serialize};

/// Parent key marking the top of the hierarchy in the default schema.
pub const DEFAULT_ROOT: &str = "装置";

/// Parent key marking the top of the hierarchy in the English schema.
pub const ENGLISH_ROOT: &str = "UNIT";

/// Names of the relations, their key columns and the root sentinel.
///
/// Non-key columns are schema-free and flow through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Relation name of the parent/child edges (file stem when loading CSV).
    pub structure_relation: String,
    /// Relation name of the part usages under leaf assemblies.
    pub parts_list_relation: String,
    /// Relation name of the part specifications.
    pub part_specs_relation: String,
    pub parent_column: String,
    pub child_column: String,
    pub part_number_column: String,
    pub designator_column: String,
    pub quantity_column: String,
    /// Reserved parent value whose children form level 1.
    pub root: String,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            structure_relation: "Structure".to_string(),
            parts_list_relation: "Parts List".to_string(),
            part_specs_relation: "Parts".to_string(),
            parent_column: "親品番".to_string(),
            child_column: "子品番".to_string(),
            part_number_column: "部品番号".to_string(),
            designator_column: "符号".to_string(),
            quantity_column: "構成数".to_string(),
            root: DEFAULT_ROOT.to_string(),
        }
    }
}

impl SchemaConfig {
    /// English column headers with `UNIT` as the root sentinel.
    pub fn english() -> Self {
        Self {
            parent_column: "Parent".to_string(),
            child_column: "Child".to_string(),
            part_number_column: "PartNumber".to_string(),
            designator_column: "Designator".to_string(),
            quantity_column: "Quantity".to_string(),
            root: ENGLISH_ROOT.to_string(),
            ..Self::default()
        }
    }

    /// Override the root sentinel.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    /// Columns that identify an edge and are hidden from attribute output.
    pub fn structure_key_columns(&self) -> [&str; 2] {
        [self.parent_column.as_str(), self.child_column.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let schema: SchemaConfig =
            serde_json::from_str(r#"{"root": "TOP", "child_column": "Kid"}"#).expect("parse");
        assert_eq!(schema.root, "TOP");
        assert_eq!(schema.child_column, "Kid");
        assert_eq!(schema.parent_column, "親品番");
        assert_eq!(schema.parts_list_relation, "Parts List");
    }

    #[test]
    fn english_preset_keeps_relation_names() {
        let schema = SchemaConfig::english();
        assert_eq!(schema.root, ENGLISH_ROOT);
        assert_eq!(schema.structure_relation, "Structure");
        assert_eq!(schema.structure_key_columns(), ["Parent", "Child"]);
    }
}
