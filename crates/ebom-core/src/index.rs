//! Parent-to-children lookup derived from the Structure relation.

use std::collections::{HashMap, HashSet};

use ebom_model::TableStore;

/// Ordered child lists keyed by parent key.
///
/// The flat Structure table is never materialized as a node tree; each
/// parent maps to its distinct children in first-occurrence order. Rows
/// with an absent parent or child contribute nothing.
#[derive(Debug, Clone, Default)]
pub struct StructureIndex {
    root: String,
    children: HashMap<String, Vec<String>>,
}

impl StructureIndex {
    /// Build the index in one pass over the store's Structure rows.
    pub fn build(store: &TableStore) -> Self {
        let mut children: HashMap<String, Vec<String>> = HashMap::new();
        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        for row in store.structure() {
            let (Some(parent), Some(child)) = (row.parent_key.as_str(), row.child_key.as_str())
            else {
                continue;
            };
            if seen.insert((parent, child)) {
                children
                    .entry(parent.to_string())
                    .or_default()
                    .push(child.to_string());
            }
        }
        tracing::debug!(
            parents = children.len(),
            root = %store.root(),
            "built structure index"
        );
        Self {
            root: store.root().to_string(),
            children,
        }
    }

    /// The sentinel parent whose children form level 1.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Distinct children of `parent` in source order; empty when none.
    pub fn children_of(&self, parent: &str) -> &[String] {
        self.children.get(parent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Level 1 items.
    pub fn roots(&self) -> &[String] {
        self.children_of(&self.root)
    }

    /// Children of the parent of level `depth`, given the chosen `path`.
    ///
    /// Returns `None` when `depth` is deeper than `path` can reach.
    pub fn options_at<'a>(&'a self, path: &[String], depth: usize) -> Option<&'a [String]> {
        match depth {
            0 => Some(self.roots()),
            _ => path.get(depth - 1).map(|parent| self.children_of(parent)),
        }
    }

    pub fn has_children(&self, key: &str) -> bool {
        !self.children_of(key).is_empty()
    }

    pub fn contains_parent(&self, key: &str) -> bool {
        self.children.contains_key(key)
    }

    pub fn parent_count(&self) -> usize {
        self.children.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ebom_model::{SchemaConfig, StructureRow, TableStore};

    fn store(rows: &[(&str, &str)]) -> TableStore {
        TableStore::new(
            SchemaConfig::english(),
            rows.iter()
                .map(|(parent, child)| StructureRow::new(parent, child))
                .collect(),
            vec![],
            vec![],
        )
    }

    #[test]
    fn children_keep_first_occurrence_order_without_duplicates() {
        let index = StructureIndex::build(&store(&[
            ("UNIT", "B"),
            ("UNIT", "A"),
            ("UNIT", "B"),
            ("A", "A1"),
            ("UNIT", "C"),
        ]));
        assert_eq!(index.roots(), ["B", "A", "C"]);
        assert_eq!(index.children_of("A"), ["A1"]);
        assert!(index.children_of("C").is_empty());
        assert!(index.children_of("missing").is_empty());
    }

    #[test]
    fn blank_children_and_parents_are_ignored() {
        let index = StructureIndex::build(&store(&[
            ("UNIT", "A"),
            ("A", ""),
            ("A", "nan"),
            ("", "ORPHAN"),
        ]));
        assert!(!index.has_children("A"));
        assert!(!index.contains_parent("A"));
        assert_eq!(index.parent_count(), 1);
    }

    #[test]
    fn options_at_follows_path() {
        let index = StructureIndex::build(&store(&[("UNIT", "A"), ("A", "A1"), ("A1", "X")]));
        let path = vec!["A".to_string(), "A1".to_string()];
        assert_eq!(index.options_at(&path, 0), Some(&["A".to_string()][..]));
        assert_eq!(index.options_at(&path, 2), Some(&["X".to_string()][..]));
        assert_eq!(index.options_at(&path, 3), None);
    }
}
