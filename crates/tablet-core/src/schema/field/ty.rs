use crate::{stmt::Value, Error, Result};

use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};

/// Storage format of timestamp columns. There is no sub-second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse format: the storage format plus optional fractional seconds, which
/// some databases append.
const TIMESTAMP_PARSE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// The closed set of field types.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldTy {
    /// The table's identity column. Values pass through unchanged.
    PrimaryKey,

    /// Native `bool`, stored as `0` / `1`.
    Boolean,

    /// Unbounded text, passed through unchanged.
    Text,

    /// Bounded text, passed through unchanged. The bound is the field's
    /// `length`.
    VarChar,

    /// Integer, passed through unchanged.
    Int,

    /// A point in time, stored as a `YYYY-MM-DD HH:MM:SS` string.
    Timestamp(Stamp),

    /// A reference to a column of another table, passed through unchanged.
    ForeignKey(ForeignKey),
}

/// When a timestamp field is set to the current time by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stamp {
    /// Never; the value is whatever the caller sets.
    None,

    /// When the record is inserted.
    OnCreate,

    /// Whenever the record is updated.
    OnUpdate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    table: String,
    column: String,
}

impl ForeignKey {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Name of the referenced table.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Name of the referenced column.
    pub fn column(&self) -> &str {
        &self.column
    }
}

impl FieldTy {
    pub fn from_storage(&self, raw: Value) -> Result<Value> {
        match self {
            FieldTy::Boolean => bool_from_storage(raw),
            FieldTy::Timestamp(_) => timestamp_from_storage(raw),
            _ => Ok(raw),
        }
    }

    pub fn to_storage(&self, native: &Value) -> Result<Value> {
        match self {
            FieldTy::Boolean => Ok(match native {
                Value::Null => Value::Null,
                native => Value::I64(is_truthy(native) as i64),
            }),
            FieldTy::Timestamp(_) => timestamp_to_storage(native),
            _ => Ok(native.clone()),
        }
    }
}

fn bool_from_storage(raw: Value) -> Result<Value> {
    Ok(match raw {
        Value::Null => Value::Null,
        Value::Bool(v) => Value::Bool(v),
        Value::I64(v) => Value::Bool(v != 0),
        Value::F64(v) => Value::Bool(v != 0.0),
        // Some drivers return integer columns as text.
        Value::String(v) => match v.trim().parse::<f64>() {
            Ok(n) => Value::Bool(n != 0.0),
            Err(_) => Value::Bool(is_truthy(&Value::String(v))),
        },
        raw => return Err(Error::type_conversion(raw, "bool")),
    })
}

/// Zero, `false`, the empty string and `"0"` are false. Every other non-null
/// value is true.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(v) => *v,
        Value::I64(v) => *v != 0,
        Value::F64(v) => *v != 0.0,
        Value::String(v) => !v.is_empty() && v != "0",
        Value::Bytes(v) => !v.is_empty(),
        Value::Timestamp(_) => true,
    }
}

fn timestamp_from_storage(raw: Value) -> Result<Value> {
    match raw {
        Value::Null => Ok(Value::Null),
        Value::String(s) if s.is_empty() => Ok(Value::Null),
        Value::String(s) => parse_timestamp(&s)
            .map(Value::Timestamp)
            .ok_or_else(|| Error::type_conversion(Value::String(s), "timestamp")),
        Value::I64(secs) => DateTime::from_timestamp(secs, 0)
            .map(Value::Timestamp)
            .ok_or_else(|| Error::type_conversion(Value::I64(secs), "timestamp")),
        Value::Timestamp(ts) => Ok(Value::Timestamp(ts.trunc_subsecs(0))),
        raw => Err(Error::type_conversion(raw, "timestamp")),
    }
}

fn timestamp_to_storage(native: &Value) -> Result<Value> {
    if !is_truthy(native) {
        return Ok(Value::Null);
    }

    match native {
        Value::Timestamp(ts) => Ok(Value::String(ts.format(TIMESTAMP_FORMAT).to_string())),
        Value::I64(secs) => DateTime::from_timestamp(*secs, 0)
            .map(|ts| Value::String(ts.format(TIMESTAMP_FORMAT).to_string()))
            .ok_or_else(|| Error::type_conversion(native.clone(), "timestamp")),
        Value::String(s) => parse_timestamp(s)
            .map(|ts| Value::String(ts.format(TIMESTAMP_FORMAT).to_string()))
            .ok_or_else(|| Error::type_conversion(native.clone(), "timestamp")),
        native => Err(Error::type_conversion(native.clone(), "timestamp")),
    }
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(naive) = NaiveDateTime::parse_from_str(s, TIMESTAMP_PARSE_FORMAT) {
        return Some(naive.and_utc().trunc_subsecs(0));
    }

    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|ts| ts.with_timezone(&Utc).trunc_subsecs(0))
}
