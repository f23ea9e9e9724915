use super::{Field, Schema, Table};
use crate::{Error, Result};

use indexmap::IndexMap;
use std::sync::Arc;

/// Collects table descriptions into a [`Schema`].
///
/// Each table name can be described exactly once. A description that fails
/// validation leaves the builder untouched.
#[derive(Debug, Default)]
pub struct Builder {
    tables: IndexMap<String, Arc<Table>>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Describe a table from its name and its ordered field map.
    pub fn describe<I, S>(&mut self, name: impl Into<String>, fields: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (S, Field)>,
        S: Into<String>,
    {
        let table = Table::describe(name, fields)?;
        self.add_table(table)
    }

    /// Register an already described table.
    pub fn add_table(&mut self, table: Table) -> Result<&mut Self> {
        if self.tables.contains_key(table.name()) {
            return Err(Error::invalid_schema(format!(
                "table `{}` is already described",
                table.name()
            )));
        }

        tracing::trace!(
            table = table.name(),
            fields = table.fields().len(),
            primary_key = table.primary_key(),
            "described table"
        );

        self.tables.insert(table.name().to_string(), Arc::new(table));
        Ok(self)
    }

    pub fn build(&mut self) -> Schema {
        Schema {
            tables: std::mem::take(&mut self.tables),
        }
    }
}
