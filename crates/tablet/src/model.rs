use crate::{db::Shared, Record, Result};

use tablet_core::{
    bail,
    schema::{Role, Table},
    stmt::{self, Filter, Value},
    Error,
};

use std::sync::Arc;

/// Load, save and delete records of one described table.
#[derive(Debug, Clone)]
pub struct Model {
    table: Arc<Table>,
    shared: Arc<Shared>,
}

impl Model {
    pub(crate) fn new(table: Arc<Table>, shared: Arc<Shared>) -> Model {
        Model { table, shared }
    }

    pub fn table(&self) -> &Arc<Table> {
        &self.table
    }

    /// An empty, unsaved record.
    pub fn new_record(&self) -> Record {
        Record::new(self.table.clone())
    }

    /// A new record with the given attributes set. Nothing is written until
    /// the record is saved.
    pub fn create<I, K, V>(&self, values: I) -> Result<Record>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut record = self.new_record();
        for (name, value) in values {
            record.set(name.as_ref(), value)?;
        }
        Ok(record)
    }

    /// The first record matching every `column = value` criterion, if any.
    ///
    /// Criteria values are bound as given, without field conversion.
    pub fn load<I, K, V>(&self, criteria: I) -> Result<Option<Record>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let rows = self.select(criteria.into_iter().collect())?;

        rows.into_iter()
            .next()
            .map(|row| Record::from_row(self.table.clone(), row))
            .transpose()
    }

    /// Every record matching the criteria. No criteria matches every row.
    pub fn load_many<I, K, V>(&self, criteria: I) -> Result<Vec<Record>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let rows = self.select(criteria.into_iter().collect())?;

        rows.into_iter()
            .map(|row| Record::from_row(self.table.clone(), row))
            .collect()
    }

    pub fn load_all(&self) -> Result<Vec<Record>> {
        let rows = self.select(Filter::default())?;

        rows.into_iter()
            .map(|row| Record::from_row(self.table.clone(), row))
            .collect()
    }

    /// Number of rows in the table.
    pub fn count(&self) -> Result<u64> {
        let rows = self
            .shared
            .engine
            .query(stmt::Select::count(self.table.name()))?;

        let Some(row) = rows.first() else {
            bail!("COUNT(*) returned no rows; table={}", self.table.name());
        };

        let Some(value) = row.get("count").or_else(|| row.get_index(0)) else {
            bail!("COUNT(*) returned an empty row; table={}", self.table.name());
        };

        let count = i64::try_from(value.clone())?;
        u64::try_from(count).map_err(|_| Error::type_conversion(Value::I64(count), "u64"))
    }

    /// Write the record: an `UPDATE` by primary key when the record has a
    /// key, an `INSERT` otherwise. After an insert into a table with a
    /// primary key, the record holds the generated key.
    ///
    /// Timestamp fields are stamped before the statement runs and keep their
    /// new value even when the statement fails.
    ///
    /// Failures carry `<table>.save()` as context; the original error is
    /// [`Error::root`].
    pub fn save(&self, record: &mut Record) -> Result<()> {
        self.check_table(record)?;

        let res = match record.key().cloned() {
            Some(key) => self.update(record, key),
            None => self.insert(record),
        };
        res.map_err(|err| err.context(self.operation("save")))
    }

    /// Delete the record's row by primary key.
    pub fn delete(&self, record: Record) -> Result<()> {
        self.check_table(&record)?;

        let (Some(primary_key), Some(key)) = (self.table.primary_key(), record.key()) else {
            return Err(Error::no_primary_key(self.table.name()));
        };

        self.shared
            .engine
            .execute(stmt::Delete {
                table: self.table.name().to_string(),
                filter: Filter::eq(primary_key, key.clone()),
            })
            .map_err(|err| err.context(self.operation("delete")))?;

        Ok(())
    }

    fn select(&self, filter: Filter) -> Result<Vec<tablet_core::driver::Row>> {
        self.shared
            .engine
            .query(stmt::Select::all(self.table.name(), filter))
    }

    fn insert(&self, record: &mut Record) -> Result<()> {
        let now = self.shared.clock.now();
        let mut insert = stmt::Insert::new(self.table.name());

        for (name, field) in self.table.data_fields() {
            if field.role() == Role::CreatedAt {
                record.stamp(name, now);
            } else if record.raw(name).is_null() {
                // Left to the column's storage-side default.
                continue;
            }

            insert.push(name, field.to_storage(record.raw(name))?);
        }

        let returning_key = self.table.primary_key().is_some();

        if let Some(key) = self.shared.engine.insert(insert, returning_key)? {
            record.set_key(key);
        }

        Ok(())
    }

    fn update(&self, record: &mut Record, key: Value) -> Result<()> {
        let Some(primary_key) = self.table.primary_key() else {
            return Err(Error::no_primary_key(self.table.name()));
        };

        let now = self.shared.clock.now();
        let mut assignments = stmt::Assignments::default();

        for (name, field) in self.table.data_fields() {
            if field.role() == Role::UpdatedAt {
                record.stamp(name, now);
            }

            assignments.set(name, field.to_storage(record.raw(name))?);
        }

        if assignments.is_empty() {
            tracing::trace!(table = self.table.name(), "no columns to update");
            return Ok(());
        }

        self.shared.engine.execute(stmt::Update {
            table: self.table.name().to_string(),
            assignments,
            filter: Filter::eq(primary_key, key),
        })?;

        Ok(())
    }

    fn operation(&self, name: &str) -> String {
        format!("{}.{name}()", self.table.name())
    }

    fn check_table(&self, record: &Record) -> Result<()> {
        if record.table().name() != self.table.name() {
            bail!(
                "record of table `{}` used with the `{}` model",
                record.table().name(),
                self.table.name()
            );
        }
        Ok(())
    }
}
