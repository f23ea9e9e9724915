mod capability;
pub use capability::Capability;

mod row;
pub use row::Row;

use crate::{stmt::Value, Result};

use std::{borrow::Cow, fmt::Debug};

/// A database driver: knows where the database lives and how to open a
/// connection to it.
pub trait Driver: Debug {
    /// The connection URL the driver was configured with.
    fn url(&self) -> Cow<'_, str>;

    /// Describes the driver's capability, which informs the SQL serializer.
    fn capability(&self) -> &'static Capability;

    /// Open a connection.
    fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// An open database connection: the storage executor the record engine runs
/// statements through.
///
/// Every call blocks until the database answers. Parameters are bound
/// positionally, in the order their placeholders appear in `sql`. Failures
/// are reported as driver errors and are never retried.
pub trait Connection: Debug + Send {
    /// Execute a statement that produces no rows. Returns the number of rows
    /// affected.
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64>;

    /// Execute a query and collect every returned row.
    fn query(&mut self, sql: &str, params: &[Value]) -> Result<Vec<Row>>;

    /// The key generated by the most recent `INSERT` on this connection.
    fn last_insert_id(&mut self) -> Result<Value>;
}
