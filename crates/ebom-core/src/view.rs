//! Render snapshot handed to the presentation layer.

use ebom_model::Attributes;
use serde::Serialize;

use crate::navigator::{DefaultSelection, LevelWindow, NavigationStatus};
use crate::parts::PartEntry;

/// Attribute panel for the edge that ends the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AttributePanel {
    /// Nothing chosen yet.
    NoSelection,
    /// The row exists but every non-key column is blank.
    Empty,
    Found { attributes: Attributes },
    NotFound { parent: String, child: String },
}

/// Parts list panel; only populated once a leaf is reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PartsPanel {
    NotLeaf,
    /// No Parts List row names the leaf as parent.
    NoRows { leaf: String },
    /// Rows exist but none has a part number.
    NoDisplayableParts { leaf: String },
    Parts {
        leaf: String,
        entries: Vec<PartEntry>,
        selected: DefaultSelection,
    },
}

impl PartsPanel {
    /// Part number whose specification is shown.
    pub fn current_part(&self) -> Option<&str> {
        match self {
            Self::Parts { selected, .. } => Some(selected.key.as_str()),
            _ => None,
        }
    }
}

/// Specification panel for the current part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SpecPanel {
    NoPart,
    Found {
        part_number: String,
        fields: Attributes,
    },
    NotFound { part_number: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub status: NavigationStatus,
    pub path: Vec<String>,
    pub window: LevelWindow,
    pub attributes: AttributePanel,
    pub parts: PartsPanel,
    pub spec: SpecPanel,
}

impl SessionView {
    pub fn is_leaf(&self) -> bool {
        self.status.is_leaf()
    }
}
