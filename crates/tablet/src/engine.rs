use crate::Result;

use tablet_core::{
    driver::{Capability, Connection, Row},
    err,
    stmt::{self, Statement, Value},
};
use tablet_sql::Serializer;

use std::sync::{Mutex, MutexGuard};

/// Serializes statements and runs them on the shared connection.
#[derive(Debug)]
pub(crate) struct Engine {
    serializer: Serializer,
    capability: &'static Capability,
    connection: Mutex<Box<dyn Connection>>,
}

impl Engine {
    pub(crate) fn new(capability: &'static Capability, connection: Box<dyn Connection>) -> Engine {
        Engine {
            serializer: Serializer::for_capability(capability),
            capability,
            connection: Mutex::new(connection),
        }
    }

    pub(crate) fn query(&self, stmt: impl Into<Statement>) -> Result<Vec<Row>> {
        let (sql, params) = self.serialize(&stmt.into());
        self.connection()?.query(&sql, &params)
    }

    pub(crate) fn execute(&self, stmt: impl Into<Statement>) -> Result<u64> {
        let (sql, params) = self.serialize(&stmt.into());
        self.connection()?.execute(&sql, &params)
    }

    /// Run an insert. With `returning_key`, also fetch the generated key
    /// before any other statement can reach the connection.
    pub(crate) fn insert(&self, stmt: stmt::Insert, returning_key: bool) -> Result<Option<Value>> {
        if returning_key && !self.capability.last_insert_id {
            tablet_core::bail!(
                "driver cannot report generated keys; table={}",
                stmt.table
            );
        }

        let (sql, params) = self.serialize(&stmt.into());

        let mut connection = self.connection()?;
        connection.execute(&sql, &params)?;

        if returning_key {
            Ok(Some(connection.last_insert_id()?))
        } else {
            Ok(None)
        }
    }

    pub(crate) fn execute_sql(&self, sql: &str, params: &[Value]) -> Result<u64> {
        tracing::debug!(sql, params = params.len(), "executing raw statement");
        self.connection()?.execute(sql, params)
    }

    fn serialize(&self, stmt: &Statement) -> (String, Vec<Value>) {
        let mut params = Vec::new();
        let sql = self.serializer.serialize(stmt, &mut params);

        tracing::debug!(
            table = stmt.table(),
            sql = %sql,
            params = params.len(),
            "issuing statement"
        );

        (sql, params)
    }

    fn connection(&self) -> Result<MutexGuard<'_, Box<dyn Connection>>> {
        self.connection
            .lock()
            .map_err(|_| err!("database connection lock poisoned"))
    }
}
