use super::{Connect, Db, Shared};
use crate::{engine::Engine, Clock, Result};

use tablet_core::{
    driver::Driver,
    schema::{self, Field, Schema, Table},
};

#[derive(Debug, Default)]
pub struct Builder {
    /// Schema builder
    core: schema::Builder,

    /// Time source for timestamp stamping. Defaults to the system clock.
    clock: Option<Clock>,
}

impl Builder {
    /// Describe a table from its name and its ordered field map.
    pub fn describe<I, S>(&mut self, name: impl Into<String>, fields: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (S, Field)>,
        S: Into<String>,
    {
        self.core.describe(name, fields)?;
        Ok(self)
    }

    /// Register an already described table.
    pub fn table(&mut self, table: Table) -> Result<&mut Self> {
        self.core.add_table(table)?;
        Ok(self)
    }

    /// Register every table of a prebuilt schema.
    pub fn schema(&mut self, schema: &Schema) -> Result<&mut Self> {
        for table in schema.tables() {
            self.core.add_table(Table::clone(table))?;
        }
        Ok(self)
    }

    pub fn clock(&mut self, clock: Clock) -> &mut Self {
        self.clock = Some(clock);
        self
    }

    pub fn connect(&mut self, url: &str) -> Result<Db> {
        self.build(Connect::new(url)?)
    }

    /// Open the driver's connection and finish the database handle.
    pub fn build(&mut self, driver: impl Driver) -> Result<Db> {
        let connection = driver.connect()?;
        let schema = self.core.build();

        tracing::debug!(
            url = %driver.url(),
            numbered_params = driver.capability().numbered_params,
            tables = schema.tables().len(),
            "database ready"
        );

        Ok(Db::new(Shared {
            schema,
            engine: Engine::new(driver.capability(), connection),
            clock: self.clock.take().unwrap_or_default(),
        }))
    }
}
