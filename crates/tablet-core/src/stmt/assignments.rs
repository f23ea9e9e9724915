use super::Value;

/// The `SET` list of an update, in column order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Assignments {
    assignments: Vec<Assignment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: Value,
}

impl Assignments {
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.assignments.push(Assignment {
            column: column.into(),
            value: value.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Assignment> + '_ {
        self.assignments.iter()
    }
}

impl<'a> IntoIterator for &'a Assignments {
    type Item = &'a Assignment;
    type IntoIter = std::slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.iter()
    }
}
