//! Relation file discovery.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Lists all CSV files in a directory.
///
/// Returns files sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Canonical form of a relation name: lowercase, with spaces, `_` and `-` removed.
pub fn relation_key(name: &str) -> String {
    name.chars()
        .filter(|ch| !matches!(ch, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Finds the CSV file whose stem names `relation`.
///
/// `Parts List`, `parts_list` and `PARTS-LIST` all match the same relation.
pub fn find_relation_file(files: &[PathBuf], relation: &str) -> Option<PathBuf> {
    let wanted = relation_key(relation);
    files
        .iter()
        .find(|path| {
            path.file_stem()
                .and_then(|stem| stem.to_str())
                .is_some_and(|stem| relation_key(stem) == wanted)
        })
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relation_keys_ignore_case_and_separators() {
        assert_eq!(relation_key("Parts List"), "partslist");
        assert_eq!(relation_key("parts_list"), "partslist");
        assert_eq!(relation_key("PARTS-LIST"), "partslist");
        assert_ne!(relation_key("Parts"), relation_key("Parts List"));
    }

    #[test]
    fn finds_exact_relation_not_prefix() {
        let files = vec![
            PathBuf::from("data/Parts List.csv"),
            PathBuf::from("data/Parts.csv"),
            PathBuf::from("data/structure.csv"),
        ];
        assert_eq!(
            find_relation_file(&files, "Parts"),
            Some(PathBuf::from("data/Parts.csv"))
        );
        assert_eq!(
            find_relation_file(&files, "Structure"),
            Some(PathBuf::from("data/structure.csv"))
        );
        assert_eq!(find_relation_file(&files, "Specs"), None);
    }
}
