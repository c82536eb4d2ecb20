//! Drill-down navigation over a flat bill of materials.
//!
//! The three relations of a [`TableStore`](ebom_model::TableStore) are turned
//! into an interactively navigable tree:
//!
//! - [`StructureIndex`]: ordered child keys per parent key.
//! - [`PathNavigator`]: the selection-path state machine.
//! - [`AttributeResolver`]: non-key columns of the edge ending the path.
//! - [`PartsJoiner`]: parts under a leaf and their specifications.
//! - [`Catalog`] / [`Session`]: a shared dataset and per-user state, producing
//!   a [`SessionView`] per render.

pub mod attributes;
pub mod index;
pub mod navigator;
pub mod parts;
pub mod selection;
pub mod session;
pub mod view;

pub use attributes::AttributeResolver;
pub use index::StructureIndex;
pub use navigator::{
    DEFAULT_WINDOW_SIZE, DefaultSelection, LevelView, LevelWindow, NavigationStatus,
    PathNavigator, default_selection,
};
pub use parts::{LabelStyle, PartEntry, PartsJoiner};
pub use selection::SelectionState;
pub use session::{Catalog, Session, ViewOptions};
pub use view::{AttributePanel, PartsPanel, SessionView, SpecPanel};
