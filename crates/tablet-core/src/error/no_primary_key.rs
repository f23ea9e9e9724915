use super::Error;

/// Error when deleting a record that has no primary key value.
#[derive(Debug)]
pub(super) struct NoPrimaryKeyError {
    table: Box<str>,
}

impl std::error::Error for NoPrimaryKeyError {}

impl core::fmt::Display for NoPrimaryKeyError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot delete a `{}` record with no primary key",
            self.table
        )
    }
}

impl Error {
    /// Creates a no primary key error.
    pub fn no_primary_key(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NoPrimaryKey(NoPrimaryKeyError {
            table: table.into().into(),
        }))
    }

    /// Returns `true` if this error is a no primary key error.
    pub fn is_no_primary_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoPrimaryKey(_))
    }
}
