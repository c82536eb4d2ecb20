//! Shared fixtures for ebom-core integration tests.

#![allow(dead_code)]

use ebom_model::{PartSpecRow, PartsListRow, SchemaConfig, StructureRow, TableStore};

/// UNIT
/// ├── ASSY1            (leaf, parts P100 and P200)
/// └── ASSY2
///     ├── SUB1
///     │   └── SUB1-1   (leaf, no parts list rows)
///     │       (and SUB1 -> DEEP -> DEEPER chain)
///     └── SUB2         (leaf, only blank part numbers)
pub fn sample_store() -> TableStore {
    let edge = |parent: &str, child: &str, name: &str| {
        StructureRow::new(parent, child)
            .with_attribute("Parent", parent)
            .with_attribute("Child", child)
            .with_attribute("Name", name)
            .with_attribute("Note", "")
    };
    TableStore::new(
        SchemaConfig::english(),
        vec![
            edge("UNIT", "ASSY1", "Frame"),
            edge("UNIT", "ASSY2", "Cover"),
            edge("ASSY2", "SUB1", "Bracket"),
            edge("ASSY2", "SUB2", ""),
            edge("ASSY2", "SUB1", "Bracket duplicate"),
            edge("SUB1", "SUB1-1", "Pin"),
            edge("SUB1", "DEEP", "Deep"),
            edge("DEEP", "DEEPER", "Deeper"),
            StructureRow::new("ASSY1", ""),
        ],
        vec![
            PartsListRow::new("ASSY1", "P100", "A1", "2"),
            PartsListRow::new("ASSY1", "P200", "", ""),
            PartsListRow::new("ASSY1", "nan", "X9", "1"),
            PartsListRow::new("SUB2", "", "B1", "1"),
            PartsListRow::new("DEEPER", "P300", "", "4"),
        ],
        vec![
            PartSpecRow::new("P100")
                .with_field("PartNumber", "P100")
                .with_field("Description", "Hex bolt")
                .with_field("Material", "")
                .with_field("Maker", "ACME"),
            PartSpecRow::new("P100").with_field("Description", "shadowed"),
            PartSpecRow::new("P300")
                .with_field("PartNumber", "P300")
                .with_field("Description", "Washer"),
        ],
    )
}

pub fn keys(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}
