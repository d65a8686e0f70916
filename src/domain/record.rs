//! CSV record model
//!
//! A [`Record`] is one row of a CSV file as an ordered column→value mapping.
//! Column order matches the file header, and transformation only ever
//! changes values, so a record written back out preserves the input shape.

/// Ordered mapping from column name to cell value for one CSV row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record with room for `capacity` columns
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Append a column/value pair, preserving insertion order
    pub fn push(&mut self, column: String, value: String) {
        self.fields.push((column, value));
    }

    /// Value of the first column with the given name, if present
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Column names in header order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Cell values in header order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, value)| value.as_str())
    }

    /// Mutable iteration over column/value pairs in header order
    pub fn entries_mut(&mut self) -> impl Iterator<Item = (&str, &mut String)> {
        self.fields
            .iter_mut()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the record has no columns
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
