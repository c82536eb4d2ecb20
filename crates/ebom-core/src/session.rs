//! Session state over a shared, read-only dataset.

use std::sync::Arc;

use ebom_model::{Attributes, EbomError, NotFoundKind, Result, TableStore};
use tracing::{debug, warn};

use crate::attributes::AttributeResolver;
use crate::index::StructureIndex;
use crate::navigator::{DEFAULT_WINDOW_SIZE, NavigationStatus, PathNavigator, default_selection};
use crate::parts::{LabelStyle, PartEntry, PartsJoiner};
use crate::selection::SelectionState;
use crate::view::{AttributePanel, PartsPanel, SessionView, SpecPanel};

/// Presentation settings of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    /// Levels shown side by side; values below one are treated as one.
    pub window_size: usize,
    pub labels: LabelStyle,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            labels: LabelStyle::default(),
        }
    }
}

impl ViewOptions {
    #[must_use]
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size.max(1);
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: LabelStyle) -> Self {
        self.labels = labels;
        self
    }
}

/// A loaded dataset and its structure index, shared by every session.
#[derive(Debug, Clone)]
pub struct Catalog {
    store: Arc<TableStore>,
    index: Arc<StructureIndex>,
}

impl Catalog {
    pub fn new(store: TableStore) -> Self {
        Self::from_shared(Arc::new(store))
    }

    pub fn from_shared(store: Arc<TableStore>) -> Self {
        let index = Arc::new(StructureIndex::build(&store));
        Self { store, index }
    }

    pub fn store(&self) -> &TableStore {
        &self.store
    }

    pub fn index(&self) -> &StructureIndex {
        &self.index
    }

    /// A fresh session with an empty path.
    pub fn session(&self, options: ViewOptions) -> Session {
        Session {
            store: Arc::clone(&self.store),
            navigator: PathNavigator::new(Arc::clone(&self.index)),
            options,
        }
    }

    /// A session resumed from a saved state, validated against this dataset.
    pub fn restore(&self, state: SelectionState, options: ViewOptions) -> Result<Session> {
        let selected_part = state.selected_part.clone();
        let navigator = PathNavigator::with_state(Arc::clone(&self.index), state)?;
        let mut session = Session {
            store: Arc::clone(&self.store),
            navigator,
            options,
        };
        if let Some(part) = selected_part {
            session.select_part(&part)?;
        }
        Ok(session)
    }
}

/// One user's drill-down. Sessions never share mutable state.
#[derive(Debug, Clone)]
pub struct Session {
    store: Arc<TableStore>,
    navigator: PathNavigator,
    options: ViewOptions,
}

impl Session {
    pub fn navigator(&self) -> &PathNavigator {
        &self.navigator
    }

    pub fn state(&self) -> &SelectionState {
        self.navigator.state()
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    pub fn set_window_size(&mut self, window_size: usize) {
        self.options.window_size = window_size.max(1);
    }

    pub fn status(&self) -> NavigationStatus {
        self.navigator.status()
    }

    pub fn select_at(&mut self, depth: usize, key: &str) -> Result<NavigationStatus> {
        self.navigator.select_at(depth, key)
    }

    /// Choose a part under the current leaf. The path is not touched.
    pub fn select_part(&mut self, part_number: &str) -> Result<()> {
        let depth = self.navigator.current_depth();
        let listed = self
            .navigator
            .leaf()
            .is_some_and(|leaf| {
                self.joiner()
                    .parts_under(leaf)
                    .iter()
                    .any(|entry| entry.part_number == part_number)
            });
        if !listed {
            warn!(part_number, depth, "part is not listed under the current leaf");
            return Err(EbomError::InvalidSelection {
                depth,
                key: part_number.to_string(),
            });
        }
        debug!(part_number, "selected part");
        self.navigator.set_selected_part(part_number.to_string());
        Ok(())
    }

    pub fn reset(&mut self) {
        self.navigator.reset();
    }

    pub fn attributes(&self) -> Result<Attributes> {
        AttributeResolver::new(&self.store).attributes_for(self.navigator.path())
    }

    /// Parts under the current leaf; empty before a leaf is reached.
    pub fn parts(&self) -> Vec<PartEntry> {
        self.navigator
            .leaf()
            .map(|leaf| self.joiner().parts_under(leaf))
            .unwrap_or_default()
    }

    pub fn spec_of(&self, part_number: &str) -> Result<Attributes> {
        self.joiner().spec_of(part_number)
    }

    pub fn view(&self) -> SessionView {
        let parts = self.parts_panel();
        let spec = match parts.current_part() {
            None => SpecPanel::NoPart,
            Some(part_number) => match self.spec_of(part_number) {
                Ok(fields) => SpecPanel::Found {
                    part_number: part_number.to_string(),
                    fields,
                },
                Err(_) => SpecPanel::NotFound {
                    part_number: part_number.to_string(),
                },
            },
        };
        SessionView {
            status: self.navigator.status(),
            path: self.navigator.path().to_vec(),
            window: self.navigator.visible_levels(self.options.window_size),
            attributes: self.attribute_panel(),
            parts,
            spec,
        }
    }

    fn joiner(&self) -> PartsJoiner<'_> {
        PartsJoiner::new(&self.store, &self.options.labels)
    }

    fn attribute_panel(&self) -> AttributePanel {
        if self.navigator.current_depth() == 0 {
            return AttributePanel::NoSelection;
        }
        match self.attributes() {
            Ok(attributes) if attributes.is_empty() => AttributePanel::Empty,
            Ok(attributes) => AttributePanel::Found { attributes },
            Err(EbomError::NotFound(NotFoundKind::Attributes { parent, child })) => {
                AttributePanel::NotFound { parent, child }
            }
            Err(error) => {
                warn!(%error, "unexpected attribute lookup failure");
                AttributePanel::Empty
            }
        }
    }

    fn parts_panel(&self) -> PartsPanel {
        let Some(leaf) = self.navigator.leaf() else {
            return PartsPanel::NotLeaf;
        };
        let leaf = leaf.to_string();
        let entries = self.joiner().parts_under(&leaf);
        let part_numbers: Vec<String> = entries
            .iter()
            .map(|entry| entry.part_number.clone())
            .collect();
        match default_selection(&part_numbers, self.state().selected_part.as_deref()) {
            Some(selected) => PartsPanel::Parts {
                leaf,
                entries,
                selected,
            },
            None if self.joiner().row_count(&leaf) == 0 => PartsPanel::NoRows { leaf },
            None => PartsPanel::NoDisplayableParts { leaf },
        }
    }
}
