use super::Value;

/// A conjunction of `column = value` conditions.
///
/// An empty filter matches every row and serializes to no `WHERE` clause.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Filter {
    conditions: Vec<Condition>,
}

/// One `column = value` test. The value is bound as given, without any field
/// conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub column: String,
    pub value: Value,
}

impl Filter {
    /// A filter matching only rows whose `column` equals `value`.
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut filter = Filter::default();
        filter.add_eq(column, value);
        filter
    }

    /// AND another equality condition onto the filter.
    pub fn add_eq(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.conditions.push(Condition {
            column: column.into(),
            value: value.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }
}

impl<K, V> FromIterator<(K, V)> for Filter
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filter = Filter::default();
        for (column, value) in iter {
            filter.add_eq(column, value);
        }
        filter
    }
}
