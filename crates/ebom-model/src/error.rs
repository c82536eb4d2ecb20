use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// What a failed lookup was looking for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NotFoundKind {
    /// No Structure row for the (parent, child) edge.
    Attributes { parent: String, child: String },
    /// Part number used in the parts list but missing from the specs.
    PartSpec { part_number: String },
}

impl fmt::Display for NotFoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attributes { parent, child } => {
                write!(f, "no structure row for {parent} -> {child}")
            }
            Self::PartSpec { part_number } => {
                write!(f, "no specification for part {part_number}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EbomError {
    /// The dataset could not be loaded; navigation is disabled.
    #[error("data unavailable: {reason}")]
    DataUnavailable { reason: String },

    /// The key is not a child of the parent at this depth.
    #[error("invalid selection '{key}' at level {level}", level = .depth + 1)]
    InvalidSelection { depth: usize, key: String },

    /// The depth skips over a level that has not been chosen yet.
    #[error(
        "cannot select at level {level} before level {next} is chosen",
        level = .depth + 1,
        next = .current_depth + 1
    )]
    OutOfOrderSelection { depth: usize, current_depth: usize },

    #[error("not found: {0}")]
    NotFound(NotFoundKind),
}

impl EbomError {
    pub fn data_unavailable(reason: impl Into<String>) -> Self {
        Self::DataUnavailable {
            reason: reason.into(),
        }
    }

    /// Errors that end the whole session.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::DataUnavailable { .. })
    }

    /// Rejected events that leave state untouched and are shown as warnings.
    pub fn is_soft(&self) -> bool {
        matches!(
            self,
            Self::InvalidSelection { .. } | Self::OutOfOrderSelection { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, EbomError>;
