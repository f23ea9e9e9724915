use super::{Assignments, Filter, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// Table to update
    pub table: String,

    /// SET
    pub assignments: Assignments,

    /// WHERE
    pub filter: Filter,
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
