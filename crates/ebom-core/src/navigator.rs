//! Selection-path state machine.
//!
//! A [`PathNavigator`] owns one session's [`SelectionState`] and only lets
//! it change along edges that exist in the [`StructureIndex`], so the path
//! is always a walk from the root sentinel down the tree.
//!
//! # States
//!
//! - `Empty`: nothing chosen yet.
//! - `Partial`: at least one level chosen and the last key has children.
//! - `LeafReached`: the last key has no children; the parts panels apply.

use std::sync::Arc;

use ebom_model::{EbomError, Result};
use serde::Serialize;
use tracing::{debug, warn};

use crate::index::StructureIndex;
use crate::selection::SelectionState;

/// Number of levels shown side by side unless configured otherwise.
pub const DEFAULT_WINDOW_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum NavigationStatus {
    Empty,
    Partial { depth: usize },
    LeafReached { depth: usize },
}

impl NavigationStatus {
    pub fn is_leaf(self) -> bool {
        matches!(self, Self::LeafReached { .. })
    }
}

/// The item a level shows as current.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefaultSelection {
    pub index: usize,
    pub key: String,
    /// True when nothing valid was chosen and the first option stands in.
    pub provisional: bool,
}

/// Pick the current item of a level.
///
/// A previous choice that is still among `options` wins. Otherwise the first
/// option is used provisionally. No options means nothing is current.
pub fn default_selection(options: &[String], previous: Option<&str>) -> Option<DefaultSelection> {
    if let Some(previous) = previous
        && let Some(index) = options.iter().position(|option| option == previous)
    {
        return Some(DefaultSelection {
            index,
            key: previous.to_string(),
            provisional: false,
        });
    }
    options.first().map(|first| DefaultSelection {
        index: 0,
        key: first.clone(),
        provisional: true,
    })
}

/// One displayable level of the structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelView {
    /// Zero-based depth used by `select_at`.
    pub depth: usize,
    /// One-based level number for display.
    pub level: usize,
    pub options: Vec<String>,
    pub selected: Option<DefaultSelection>,
}

/// The levels currently in view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LevelWindow {
    pub levels: Vec<LevelView>,
    /// Levels scrolled out of view on the left.
    pub hidden_before: usize,
    /// The window is full and the current item of its last level has
    /// children of its own.
    pub more_levels_available: bool,
}

#[derive(Debug, Clone)]
pub struct PathNavigator {
    index: Arc<StructureIndex>,
    state: SelectionState,
}

impl PathNavigator {
    pub fn new(index: Arc<StructureIndex>) -> Self {
        Self {
            index,
            state: SelectionState::new(),
        }
    }

    /// Resume from a previously saved state, checking that its path is still
    /// a walk from the root. A part on a non-leaf path is rejected.
    pub fn with_state(index: Arc<StructureIndex>, state: SelectionState) -> Result<Self> {
        let mut navigator = Self::new(index);
        for (depth, key) in state.path.iter().enumerate() {
            navigator.select_at(depth, key)?;
        }
        if let Some(part) = state.selected_part {
            if !navigator.is_leaf() {
                return Err(EbomError::InvalidSelection {
                    depth: navigator.current_depth(),
                    key: part,
                });
            }
            navigator.state.selected_part = Some(part);
        }
        Ok(navigator)
    }

    pub fn index(&self) -> &StructureIndex {
        &self.index
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn into_state(self) -> SelectionState {
        self.state
    }

    pub fn path(&self) -> &[String] {
        &self.state.path
    }

    pub fn current_depth(&self) -> usize {
        self.state.depth()
    }

    pub fn is_leaf(&self) -> bool {
        self.state
            .last()
            .is_some_and(|last| !self.index.has_children(last))
    }

    pub fn status(&self) -> NavigationStatus {
        let depth = self.current_depth();
        if depth == 0 {
            NavigationStatus::Empty
        } else if self.is_leaf() {
            NavigationStatus::LeafReached { depth }
        } else {
            NavigationStatus::Partial { depth }
        }
    }

    /// The leaf key when the path ends at a leaf.
    pub fn leaf(&self) -> Option<&str> {
        if self.is_leaf() {
            self.state.last()
        } else {
            None
        }
    }

    /// Choose `key` at `depth`, discarding every deeper choice and the part.
    ///
    /// Rejected selections leave the state untouched.
    pub fn select_at(&mut self, depth: usize, key: &str) -> Result<NavigationStatus> {
        let current_depth = self.current_depth();
        if depth > current_depth {
            warn!(depth, current_depth, key, "out of order selection");
            return Err(EbomError::OutOfOrderSelection {
                depth,
                current_depth,
            });
        }
        let options = self
            .index
            .options_at(&self.state.path, depth)
            .unwrap_or(&[]);
        if !options.iter().any(|option| option == key) {
            warn!(depth, key, "selection is not a child of the parent level");
            return Err(EbomError::InvalidSelection {
                depth,
                key: key.to_string(),
            });
        }
        self.state.replace_at(depth, key.to_string());
        let status = self.status();
        debug!(depth, key, ?status, "selected");
        Ok(status)
    }

    pub(crate) fn set_selected_part(&mut self, part_number: String) {
        self.state.selected_part = Some(part_number);
    }

    pub fn reset(&mut self) {
        self.state.clear();
    }

    /// Up to `window_size` levels ending at the level after the last choice.
    ///
    /// A level is displayable when it has options, so a leaf adds no empty
    /// trailing level. `window_size` is clamped to at least one.
    pub fn visible_levels(&self, window_size: usize) -> LevelWindow {
        let path = self.path();
        let mut levels = Vec::new();
        for depth in 0..=path.len() {
            let options = self.index.options_at(path, depth).unwrap_or(&[]);
            if options.is_empty() {
                break;
            }
            let previous = path.get(depth).map(String::as_str);
            levels.push(LevelView {
                depth,
                level: depth + 1,
                options: options.to_vec(),
                selected: default_selection(options, previous),
            });
        }

        let window_size = window_size.max(1);
        let hidden_before = levels.len().saturating_sub(window_size);
        levels.drain(..hidden_before);
        // a free column means the next level simply appears once chosen
        let more_levels_available = levels.len() >= window_size
            && levels
                .last()
                .and_then(|level| level.selected.as_ref())
                .is_some_and(|selected| self.index.has_children(&selected.key));

        LevelWindow {
            levels,
            hidden_before,
            more_levels_available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|key| (*key).to_string()).collect()
    }

    #[test]
    fn previous_choice_wins_when_still_valid() {
        let selected = default_selection(&options(&["A", "B", "C"]), Some("B")).expect("some");
        assert_eq!(selected.index, 1);
        assert_eq!(selected.key, "B");
        assert!(!selected.provisional);
    }

    #[test]
    fn first_option_is_provisional_otherwise() {
        for previous in [None, Some("Z")] {
            let selected = default_selection(&options(&["A", "B"]), previous).expect("some");
            assert_eq!(selected.index, 0);
            assert_eq!(selected.key, "A");
            assert!(selected.provisional);
        }
    }

    #[test]
    fn no_options_means_no_selection() {
        assert_eq!(default_selection(&[], Some("A")), None);
    }
}
