//! Materialized rows.
//!
//! A [`Row`] is one rendered unit of output: the header (id 0) or one data
//! record (ids 1..N in input order), expressed as column-name/text pairs.
//! Rows are built fresh for every render call and discarded with it.

use crate::record::Field;

/// One cell of a materialized row.
#[derive(Clone, Debug)]
pub(crate) struct RowValue {
    /// Source column name; ties the cell to its descriptor and width entry.
    pub column: String,
    /// The formatted text. For the header row this is the display name.
    pub text: String,
}

/// One materialized row.
#[derive(Clone, Debug)]
pub(crate) struct Row {
    /// 0 for the header, 1..N for data rows in input order.
    pub id: usize,
    /// True for the header row.
    pub header: bool,
    pub values: Vec<RowValue>,
}

impl Row {
    /// Builds the header row from resolved fields; its cell texts are the
    /// display names, so header widths participate in width calculation
    /// like any other row.
    pub fn header(fields: &[Field]) -> Row {
        Row {
            id: 0,
            header: true,
            values: fields
                .iter()
                .map(|field| RowValue {
                    column: field.name.clone(),
                    text: field.display_name().to_string(),
                })
                .collect(),
        }
    }

    /// Builds a data row from pre-formatted cell texts, one per field.
    pub fn data(id: usize, fields: &[Field], texts: Vec<String>) -> Row {
        Row {
            id,
            header: false,
            values: fields
                .iter()
                .zip(texts)
                .map(|(field, text)| RowValue {
                    column: field.name.clone(),
                    text,
                })
                .collect(),
        }
    }

    /// The cell for the named column, if present.
    pub fn get(&self, column: &str) -> Option<&RowValue> {
        self.values.iter().find(|v| v.column == column)
    }
}
