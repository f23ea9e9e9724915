use super::Value;
use crate::{Error, Result};

// All integers are carried as `I64`; narrowing back checks the range.
macro_rules! impl_num {
    ( $( $ty:ty => $name:literal ),* ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::I64(value as i64)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::I64(*value as i64)
                }
            }

            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self> {
                    match value {
                        Value::I64(v) => <$ty>::try_from(v)
                            .map_err(|_| Error::type_conversion(Value::I64(v), $name)),
                        // Drivers such as MySQL hand generated keys back as text.
                        Value::String(v) => v
                            .parse::<$ty>()
                            .map_err(|_| Error::type_conversion(Value::String(v.clone()), $name)),
                        value => Err(Error::type_conversion(value, $name)),
                    }
                }
            }
        )*
    };
}

impl_num! {
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32"
}
