use crate::Result;

use tablet_core::{
    driver::Row,
    schema::{Role, Table},
    stmt::Value,
    Error,
};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use std::sync::Arc;

static NULL: Value = Value::Null;

/// One row-backed object: a table description plus the native values of its
/// attributes.
///
/// A record whose primary key attribute is set is persisted; anything else
/// is new. The key is only ever assigned by loading a row or by inserting
/// the record, never through [`Record::set`].
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    table: Arc<Table>,
    values: IndexMap<String, Value>,
}

impl Record {
    pub(crate) fn new(table: Arc<Table>) -> Record {
        Record {
            table,
            values: IndexMap::new(),
        }
    }

    /// Build a record from a row returned by the database, converting every
    /// column with its field's storage conversion.
    pub(crate) fn from_row(table: Arc<Table>, row: Row) -> Result<Record> {
        let mut values = IndexMap::with_capacity(row.len());

        for (column, raw) in row {
            let value = table.field(&column)?.from_storage(raw)?;
            values.insert(column, value);
        }

        Ok(Record { table, values })
    }

    pub fn table(&self) -> &Arc<Table> {
        &self.table
    }

    /// Returns the value of the attribute `name`, or null when it was never
    /// set.
    pub fn get(&self, name: &str) -> Result<&Value> {
        self.table.field(name)?;
        Ok(self.raw(name))
    }

    /// Returns the value of the attribute `name` converted to `T`.
    pub fn get_as<T>(&self, name: &str) -> Result<T>
    where
        T: TryFrom<Value, Error = Error>,
    {
        T::try_from(self.get(name)?.clone())
    }

    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        if self.table.field(name)?.role() == Role::PrimaryKey {
            return Err(Error::immutable_field(self.table.name(), name));
        }

        self.values.insert(name.to_string(), value.into());
        Ok(())
    }

    /// The primary key value, when the table has a primary key field and the
    /// attribute holds a non-null value.
    pub fn key(&self) -> Option<&Value> {
        let primary_key = self.table.primary_key()?;
        self.values.get(primary_key)?.non_null()
    }

    /// True until the record has been inserted or was loaded.
    pub fn is_new(&self) -> bool {
        self.key().is_none()
    }

    /// Attributes that have been assigned, in assignment order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub(crate) fn raw(&self, name: &str) -> &Value {
        self.values.get(name).unwrap_or(&NULL)
    }

    pub(crate) fn stamp(&mut self, name: &str, now: DateTime<Utc>) {
        tracing::trace!(table = self.table.name(), field = name, %now, "stamping timestamp");
        self.values.insert(name.to_string(), Value::Timestamp(now));
    }

    pub(crate) fn set_key(&mut self, key: Value) {
        if let Some(primary_key) = self.table.primary_key() {
            self.values.insert(primary_key.to_string(), key);
        }
    }
}
