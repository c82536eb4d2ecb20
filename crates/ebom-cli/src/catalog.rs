//! Loading a dataset and replaying selections against it.

use std::path::Path;

use ebom_core::{Catalog, Session};
use ebom_ingest::{load_schema_config, load_table_store};
use ebom_model::{EbomError, SchemaConfig};
use tracing::{debug, warn};

/// Start from `preset`, then apply the JSON overrides in `schema_file` and
/// finally an explicit root sentinel.
pub fn resolve_schema(
    preset: SchemaConfig,
    schema_file: Option<&Path>,
    root: Option<&str>,
) -> Result<SchemaConfig, EbomError> {
    let schema = match schema_file {
        Some(path) => load_schema_config(path)?,
        None => preset,
    };
    Ok(match root {
        Some(root) => schema.with_root(root),
        None => schema,
    })
}

/// Load the three relations from a CSV directory or workbook. Every failure
/// is `DataUnavailable`.
pub fn load_catalog(source: &Path, schema: &SchemaConfig) -> Result<Catalog, EbomError> {
    let store = load_table_store(source, schema)?;
    let catalog = Catalog::new(store);
    debug!(
        parents = catalog.index().parent_count(),
        roots = catalog.index().roots().len(),
        "indexed structure"
    );
    Ok(catalog)
}

/// Apply `selections` at depths `0..` in order, then `part` if given.
///
/// Stops at the first rejected event and returns it; everything accepted
/// before it stays applied.
pub fn replay(
    session: &mut Session,
    selections: &[String],
    part: Option<&str>,
) -> Result<(), EbomError> {
    for (depth, key) in selections.iter().enumerate() {
        if let Err(error) = session.select_at(depth, key) {
            warn!(%error, "replay stopped");
            return Err(error);
        }
    }
    if let Some(part) = part {
        session.select_part(part)?;
    }
    Ok(())
}
