use super::{Field, Role};
use crate::{Error, Result};

use indexmap::IndexMap;

/// Static description of one database table.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Name of the table, used unquoted in generated SQL
    name: String,

    /// Fields in the order they were described. This order is the column
    /// order of every generated `INSERT` and `UPDATE`.
    fields: IndexMap<String, Field>,

    /// Name of the primary key field, if the table has one
    primary_key: Option<String>,
}

impl Table {
    /// Validate a field map and build the table description.
    ///
    /// Fails with an invalid schema error when more than one primary key
    /// field is present or when a field name repeats.
    pub fn describe<I, S>(name: impl Into<String>, fields: I) -> Result<Table>
    where
        I: IntoIterator<Item = (S, Field)>,
        S: Into<String>,
    {
        let name = name.into();
        let mut map = IndexMap::new();
        let mut primary_key: Option<String> = None;

        for (field_name, field) in fields {
            let field_name = field_name.into();

            if field.role() == Role::PrimaryKey {
                if let Some(existing) = &primary_key {
                    return Err(Error::invalid_schema(format!(
                        "table `{name}` cannot have more than one primary key field \
                         (`{existing}` and `{field_name}`)"
                    )));
                }
                primary_key = Some(field_name.clone());
            }

            if map.contains_key(&field_name) {
                return Err(Error::invalid_schema(format!(
                    "table `{name}` describes field `{field_name}` more than once"
                )));
            }

            map.insert(field_name, field);
        }

        Ok(Table {
            name,
            fields: map,
            primary_key,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field with the given name, or an unknown field error.
    pub fn field(&self, name: &str) -> Result<&Field> {
        self.fields
            .get(name)
            .ok_or_else(|| Error::unknown_field(&self.name, name))
    }

    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl ExactSizeIterator<Item = (&str, &Field)> + '_ {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    /// Every field except the primary key, in description order.
    pub fn data_fields(&self) -> impl Iterator<Item = (&str, &Field)> + '_ {
        self.fields().filter(|(_, field)| field.role() != Role::PrimaryKey)
    }

    pub fn primary_key(&self) -> Option<&str> {
        self.primary_key.as_deref()
    }

    pub fn is_primary_key(&self, name: &str) -> bool {
        self.primary_key.as_deref() == Some(name)
    }
}
