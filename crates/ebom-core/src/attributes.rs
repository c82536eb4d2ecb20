use ebom_model::{Attributes, EbomError, NotFoundKind, Result, TableStore};

/// Resolves the non-key columns of the edge that ends a selection path.
#[derive(Debug, Clone, Copy)]
pub struct AttributeResolver<'a> {
    store: &'a TableStore,
}

impl<'a> AttributeResolver<'a> {
    pub fn new(store: &'a TableStore) -> Self {
        Self { store }
    }

    /// Attributes of the Structure row for `path[-2] -> path[-1]`, or
    /// `root -> path[0]` for a single-element path.
    ///
    /// The first matching row wins. Key columns and absent values are left
    /// out; the remaining columns keep their source order.
    pub fn attributes_for(&self, path: &[String]) -> Result<Attributes> {
        let root = self.store.root();
        let (parent, child) = match path {
            [] => {
                return Err(EbomError::NotFound(NotFoundKind::Attributes {
                    parent: root.to_string(),
                    child: String::new(),
                }));
            }
            [only] => (root, only.as_str()),
            [.., parent, child] => (parent.as_str(), child.as_str()),
        };
        self.edge_attributes(parent, child)
    }

    pub fn edge_attributes(&self, parent: &str, child: &str) -> Result<Attributes> {
        let row = self
            .store
            .structure()
            .iter()
            .find(|row| row.is_edge(parent, child))
            .ok_or_else(|| {
                EbomError::NotFound(NotFoundKind::Attributes {
                    parent: parent.to_string(),
                    child: child.to_string(),
                })
            })?;
        let key_columns = self.store.schema().structure_key_columns();
        Ok(row.attributes.without_absent(&key_columns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ebom_model::{SchemaConfig, StructureRow};

    fn store() -> TableStore {
        TableStore::new(
            SchemaConfig::english(),
            vec![
                StructureRow::new("UNIT", "A")
                    .with_attribute("Parent", "UNIT")
                    .with_attribute("Child", "A")
                    .with_attribute("Name", "Frame")
                    .with_attribute("Note", ""),
                StructureRow::new("A", "A1")
                    .with_attribute("Parent", "A")
                    .with_attribute("Child", "A1")
                    .with_attribute("Name", "first"),
                StructureRow::new("A", "A1").with_attribute("Name", "second"),
            ],
            vec![],
            vec![],
        )
    }

    #[test]
    fn single_element_path_uses_root_as_parent() {
        let store = store();
        let attrs = AttributeResolver::new(&store)
            .attributes_for(&["A".to_string()])
            .expect("attributes");
        let present: Vec<(&str, &str)> = attrs.present().collect();
        assert_eq!(present, vec![("Name", "Frame")]);
    }

    #[test]
    fn first_matching_row_wins() {
        let store = store();
        let attrs = AttributeResolver::new(&store)
            .attributes_for(&["A".to_string(), "A1".to_string()])
            .expect("attributes");
        assert_eq!(attrs.text("Name"), Some("first"));
        assert_eq!(attrs.get("Parent"), None);
        assert_eq!(attrs.get("Child"), None);
    }

    #[test]
    fn missing_edge_is_not_found() {
        let store = store();
        let resolver = AttributeResolver::new(&store);
        let err = resolver
            .attributes_for(&["A1".to_string()])
            .unwrap_err();
        assert_eq!(
            err,
            EbomError::NotFound(NotFoundKind::Attributes {
                parent: "UNIT".to_string(),
                child: "A1".to_string(),
            })
        );
        assert!(matches!(
            resolver.attributes_for(&[]),
            Err(EbomError::NotFound(_))
        ));
    }
}
