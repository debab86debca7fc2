/// A row of data: one record's ordered field values.
///
/// Rows created through the insert path carry the primary key as their
/// first field.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// The ordered fields in this row.
    pub fields: Vec<String>,
}

impl Row {
    /// Creates a new row from a vector of fields.
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// The key field, when the row has one.
    pub fn key(&self) -> Option<&str> {
        self.fields.first().map(String::as_str)
    }
}
