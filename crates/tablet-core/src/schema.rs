mod builder;
pub use builder::Builder;

mod field;
pub use field::{Field, FieldTy, ForeignKey, Role, Stamp, TIMESTAMP_FORMAT};

mod table;
pub use table::Table;

use crate::{Error, Result};
use indexmap::IndexMap;
use std::sync::Arc;

/// The set of described tables.
///
/// A `Schema` is produced once by [`Builder`] and is immutable afterwards.
/// Table descriptions are reference counted so records can hold on to the
/// description they were created from.
#[derive(Debug, Default, Clone)]
pub struct Schema {
    tables: IndexMap<String, Arc<Table>>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Look up a described table by name.
    pub fn table(&self, name: &str) -> Result<&Arc<Table>> {
        self.tables
            .get(name)
            .ok_or_else(|| Error::table_not_described(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Described tables, in the order they were described.
    pub fn tables(&self) -> impl ExactSizeIterator<Item = &Arc<Table>> + '_ {
        self.tables.values()
    }
}
