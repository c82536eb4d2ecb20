pub mod error;
pub mod rows;
pub mod schema;
pub mod store;
pub mod value;

pub use error::{EbomError, NotFoundKind, Result};
pub use rows::{PartSpecRow, PartsListRow, StructureRow};
pub use schema::{DEFAULT_ROOT, ENGLISH_ROOT, SchemaConfig};
pub use store::{StoreSummary, TableStore};
pub use value::{Attributes, Value};
