use chrono::{DateTime, NaiveDateTime, Utc};

use crate::{stmt::Value, Error, Result};

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Self::Timestamp(value.and_utc())
    }
}

impl TryFrom<Value> for DateTime<Utc> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Timestamp(value) => Ok(value),
            value => Err(Error::type_conversion(value, "DateTime<Utc>")),
        }
    }
}

impl TryFrom<Value> for NaiveDateTime {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Timestamp(value) => Ok(value.naive_utc()),
            value => Err(Error::type_conversion(value, "NaiveDateTime")),
        }
    }
}
