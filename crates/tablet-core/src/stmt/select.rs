use super::{Filter, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// Table to read from
    pub table: String,

    /// What each returned row contains
    pub projection: Projection,

    /// WHERE
    pub filter: Filter,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    /// `*`: every column of the table
    All,

    /// `COUNT(*)`, aliased to the given column name
    Count(String),
}

impl Select {
    pub fn all(table: impl Into<String>, filter: Filter) -> Self {
        Self {
            table: table.into(),
            projection: Projection::All,
            filter,
        }
    }

    pub fn count(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            projection: Projection::Count("count".to_string()),
            filter: Filter::default(),
        }
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
