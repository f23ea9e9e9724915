mod ty;
pub use ty::{FieldTy, ForeignKey, Stamp, TIMESTAMP_FORMAT};

use crate::{stmt::Value, Result};

/// Describes one column of a table: how its values are stored and converted.
///
/// `length`, `nullable` and `default` are descriptive metadata for schema
/// tooling. Nothing in the record engine validates values against them.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    ty: FieldTy,

    /// Optional size hint, e.g. the `N` of `VARCHAR(N)`
    length: Option<u64>,

    /// Whether the column accepts NULL
    nullable: bool,

    /// Value the column defaults to on the storage side
    default: Option<Value>,
}

/// How the record engine treats a field when building statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// An ordinary column
    Plain,

    /// The table's identity column
    PrimaryKey,

    /// Stamped with the current time when the record is first inserted
    CreatedAt,

    /// Stamped with the current time every time the record is updated
    UpdatedAt,

    /// References a column of another table
    ForeignKey,
}

impl Field {
    pub fn new(ty: FieldTy) -> Self {
        Self {
            ty,
            length: None,
            nullable: true,
            default: None,
        }
    }

    pub fn primary_key() -> Self {
        Self::new(FieldTy::PrimaryKey)
    }

    pub fn boolean() -> Self {
        Self::new(FieldTy::Boolean)
    }

    pub fn text() -> Self {
        Self::new(FieldTy::Text)
    }

    pub fn varchar(length: u64) -> Self {
        Self::new(FieldTy::VarChar).length(length)
    }

    pub fn int() -> Self {
        Self::new(FieldTy::Int)
    }

    pub fn timestamp() -> Self {
        Self::new(FieldTy::Timestamp(Stamp::None))
    }

    /// A timestamp set to the current time on insert and never touched again.
    pub fn create_timestamp() -> Self {
        Self::new(FieldTy::Timestamp(Stamp::OnCreate))
    }

    /// A timestamp set to the current time on every update.
    pub fn update_timestamp() -> Self {
        Self::new(FieldTy::Timestamp(Stamp::OnUpdate))
    }

    /// A reference to `column` of the table named `table`.
    pub fn foreign_key(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::new(FieldTy::ForeignKey(ForeignKey::new(table, column)))
    }

    pub fn length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn ty(&self) -> &FieldTy {
        &self.ty
    }

    pub fn role(&self) -> Role {
        match &self.ty {
            FieldTy::PrimaryKey => Role::PrimaryKey,
            FieldTy::Timestamp(Stamp::OnCreate) => Role::CreatedAt,
            FieldTy::Timestamp(Stamp::OnUpdate) => Role::UpdatedAt,
            FieldTy::ForeignKey(_) => Role::ForeignKey,
            FieldTy::Boolean
            | FieldTy::Text
            | FieldTy::VarChar
            | FieldTy::Int
            | FieldTy::Timestamp(Stamp::None) => Role::Plain,
        }
    }

    pub fn get_length(&self) -> Option<u64> {
        self.length
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn get_default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Convert a raw value read from the database into the value exposed on a
    /// record.
    pub fn from_storage(&self, raw: Value) -> Result<Value> {
        self.ty.from_storage(raw)
    }

    /// Convert a record's value into the value written to the database.
    pub fn to_storage(&self, native: &Value) -> Result<Value> {
        self.ty.to_storage(native)
    }
}

impl From<FieldTy> for Field {
    fn from(ty: FieldTy) -> Self {
        Field::new(ty)
    }
}
