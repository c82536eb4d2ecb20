//! Typed rows of the three EBOM relations.

use serde::Serialize;

use crate::value::{Attributes, Value};

/// One parent/child edge of the structure tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureRow {
    pub parent_key: Value,
    /// Absent for "no child" rows.
    pub child_key: Value,
    /// Every column of the source row, key columns included.
    pub attributes: Attributes,
}

impl StructureRow {
    pub fn new(parent_key: &str, child_key: &str) -> Self {
        Self {
            parent_key: Value::from_raw(parent_key),
            child_key: Value::from_raw(child_key),
            attributes: Attributes::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, column: &str, raw: &str) -> Self {
        self.attributes.insert(column, Value::from_raw(raw));
        self
    }

    /// True when this row is the edge `parent -> child`.
    pub fn is_edge(&self, parent: &str, child: &str) -> bool {
        self.parent_key.as_str() == Some(parent) && self.child_key.as_str() == Some(child)
    }
}

/// One part used directly under a leaf assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartsListRow {
    pub parent_key: Value,
    pub part_number: Value,
    pub designator: Value,
    pub quantity: Value,
    /// Every column of the source row, key columns included.
    pub attributes: Attributes,
}

impl PartsListRow {
    pub fn new(parent_key: &str, part_number: &str, designator: &str, quantity: &str) -> Self {
        Self {
            parent_key: Value::from_raw(parent_key),
            part_number: Value::from_raw(part_number),
            designator: Value::from_raw(designator),
            quantity: Value::from_raw(quantity),
            attributes: Attributes::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, column: &str, raw: &str) -> Self {
        self.attributes.insert(column, Value::from_raw(raw));
        self
    }
}

/// Specification of a single part number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartSpecRow {
    pub part_number: Value,
    /// Every column of the source row, including the part number column.
    pub fields: Attributes,
}

impl PartSpecRow {
    pub fn new(part_number: &str) -> Self {
        Self {
            part_number: Value::from_raw(part_number),
            fields: Attributes::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, column: &str, raw: &str) -> Self {
        self.fields.insert(column, Value::from_raw(raw));
        self
    }
}
