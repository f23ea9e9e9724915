use super::Error;

/// Error when a table is used before it has been described.
#[derive(Debug)]
pub(super) struct TableNotDescribedError {
    table: Box<str>,
}

impl std::error::Error for TableNotDescribedError {}

impl core::fmt::Display for TableNotDescribedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "table `{}` has not been described", self.table)
    }
}

impl Error {
    /// Creates a table not described error.
    pub fn table_not_described(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TableNotDescribed(TableNotDescribedError {
            table: table.into().into(),
        }))
    }

    /// Returns `true` if this error is a table not described error.
    pub fn is_table_not_described(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TableNotDescribed(_))
    }
}
