use super::{Statement, Value};

/// A single-row `INSERT`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Insert {
    /// Table to insert into
    pub table: String,

    /// Target columns, parallel to `values`
    pub columns: Vec<String>,

    /// Storage values to bind
    pub values: Vec<Value>,
}

impl Insert {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Default::default()
        }
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.columns.push(column.into());
        self.values.push(value.into());
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
