//! Parts list and part specification joins for a leaf assembly.

use ebom_model::{Attributes, EbomError, NotFoundKind, Result, TableStore};
use serde::Serialize;

/// Annotation names used when composing part display labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelStyle {
    pub designator: String,
    pub quantity: String,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            designator: "designator".to_string(),
            quantity: "qty".to_string(),
        }
    }
}

impl LabelStyle {
    /// Annotation names of the Japanese workbooks.
    pub fn japanese() -> Self {
        Self {
            designator: "符号".to_string(),
            quantity: "数".to_string(),
        }
    }

    /// `P100 [designator:A1, qty:2]`, `P100 [qty:2]` or bare `P100`.
    pub fn label(&self, part_number: &str, designator: Option<&str>, quantity: Option<&str>) -> String {
        match (designator, quantity) {
            (Some(d), Some(q)) => format!(
                "{part_number} [{}:{d}, {}:{q}]",
                self.designator, self.quantity
            ),
            (Some(d), None) => format!("{part_number} [{}:{d}]", self.designator),
            (None, Some(q)) => format!("{part_number} [{}:{q}]", self.quantity),
            (None, None) => part_number.to_string(),
        }
    }
}

/// One selectable part under a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartEntry {
    pub part_number: String,
    pub designator: Option<String>,
    pub quantity: Option<String>,
    pub display_label: String,
}

#[derive(Debug, Clone, Copy)]
pub struct PartsJoiner<'a> {
    store: &'a TableStore,
    labels: &'a LabelStyle,
}

impl<'a> PartsJoiner<'a> {
    pub fn new(store: &'a TableStore, labels: &'a LabelStyle) -> Self {
        Self { store, labels }
    }

    /// Number of Parts List rows whose parent is `leaf`, blank part numbers included.
    pub fn row_count(&self, leaf: &str) -> usize {
        self.store
            .parts_list()
            .iter()
            .filter(|row| row.parent_key.as_str() == Some(leaf))
            .count()
    }

    /// Parts used directly under `leaf`, in source order.
    ///
    /// Rows without a part number are skipped. No rows is not an error.
    pub fn parts_under(&self, leaf: &str) -> Vec<PartEntry> {
        self.store
            .parts_list()
            .iter()
            .filter(|row| row.parent_key.as_str() == Some(leaf))
            .filter_map(|row| {
                let part_number = row.part_number.as_str()?;
                let designator = row.designator.as_str();
                let quantity = row.quantity.as_str();
                Some(PartEntry {
                    part_number: part_number.to_string(),
                    designator: designator.map(str::to_string),
                    quantity: quantity.map(str::to_string),
                    display_label: self.labels.label(part_number, designator, quantity),
                })
            })
            .collect()
    }

    /// All present fields of the first Parts row for `part_number`.
    pub fn spec_of(&self, part_number: &str) -> Result<Attributes> {
        self.store
            .part_specs()
            .iter()
            .find(|row| row.part_number.as_str() == Some(part_number))
            .map(|row| row.fields.without_absent(&[]))
            .ok_or_else(|| {
                tracing::warn!(part_number, "part is listed but has no specification");
                EbomError::NotFound(NotFoundKind::PartSpec {
                    part_number: part_number.to_string(),
                })
            })
    }
}
