mod builder;
pub use builder::Builder;

mod connect;
pub use connect::Connect;

use crate::{engine::Engine, Clock, Model, Result};

use tablet_core::{stmt::Value, Schema};

use std::sync::Arc;

/// Shared state between all `Db` clones and the models they hand out.
#[derive(Debug)]
pub(crate) struct Shared {
    pub(crate) schema: Schema,
    pub(crate) engine: Engine,
    pub(crate) clock: Clock,
}

/// A database handle: the described tables plus the one connection every
/// model issues its statements through.
///
/// Cloning is cheap; clones share the connection.
#[derive(Debug, Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub(crate) fn new(shared: Shared) -> Db {
        Db {
            shared: Arc::new(shared),
        }
    }

    /// Returns the model of a described table.
    pub fn model(&self, table: &str) -> Result<Model> {
        let table = self.shared.schema.table(table)?.clone();
        Ok(Model::new(table, self.shared.clone()))
    }

    pub fn schema(&self) -> &Schema {
        &self.shared.schema
    }

    pub fn clock(&self) -> &Clock {
        &self.shared.clock
    }

    /// Run a raw SQL statement that returns no rows, such as DDL, on the
    /// shared connection.
    pub fn execute_sql(&self, sql: &str, params: &[Value]) -> Result<u64> {
        self.shared.engine.execute_sql(sql, params)
    }
}
