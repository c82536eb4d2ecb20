use serde::{Deserialize, Serialize};

/// Per-session drill-down state: the chosen path and the chosen part.
///
/// Owned by exactly one session. Serializable so a host can park it between
/// requests; nothing in this crate persists it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    /// Keys chosen from level 1 downwards.
    pub path: Vec<String>,
    /// Part chosen under the leaf at the end of `path`.
    pub selected_part: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    /// Set `path[depth]`, drop everything deeper and forget the part.
    pub(crate) fn replace_at(&mut self, depth: usize, key: String) {
        self.path.truncate(depth);
        self.path.push(key);
        self.selected_part = None;
    }

    pub(crate) fn clear(&mut self) {
        self.path.clear();
        self.selected_part = None;
    }
}
