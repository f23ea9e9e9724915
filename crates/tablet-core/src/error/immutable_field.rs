use super::Error;

/// Error when writing to a table's primary key field through a record.
#[derive(Debug)]
pub(super) struct ImmutableFieldError {
    table: Box<str>,
    field: Box<str>,
}

impl std::error::Error for ImmutableFieldError {}

impl core::fmt::Display for ImmutableFieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot modify primary key field `{}` of table `{}`",
            self.field, self.table
        )
    }
}

impl Error {
    /// Creates an immutable field error.
    ///
    /// A record's identity is only ever assigned by loading it or by the
    /// storage-generated key of a successful insert.
    pub fn immutable_field(table: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ImmutableField(ImmutableFieldError {
            table: table.into().into(),
            field: field.into().into(),
        }))
    }

    /// Returns `true` if this error is an immutable field error.
    pub fn is_immutable_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ImmutableField(_))
    }
}
