//! Dynamically-shaped tabular input.
//!
//! [`TabularData`] is the column-name-keyed counterpart to the [`Record`]
//! trait: an ordered set of named columns plus rows of [`Value`] cells,
//! for data whose shape is only known at run time (query results, parsed
//! files, JSON). It feeds the same renderers through a structurally
//! separate path — cells are looked up by column name, not through a
//! typed accessor — and that separation is deliberate.
//!
//! [`Record`]: crate::record::Record

use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::record::Field;
use crate::value::Value;

/// An ordered set of named columns plus rows of cell values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TabularData {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl TabularData {
    /// Create an empty table with the given column names.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TabularData {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Create a table from column names and rows in one call.
    pub fn from_rows<I, S>(columns: I, rows: Vec<Vec<Value>>) -> Result<Self, RenderError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut data = TabularData::new(columns);
        for row in rows {
            data.push_row(row)?;
        }
        Ok(data)
    }

    /// Build a table from a JSON array of flat objects.
    ///
    /// The column set is taken from the first object's keys; later objects
    /// contribute `Null` for keys they lack, and keys outside the column
    /// set are dropped. Nested arrays or objects are rejected — this is
    /// flat tabular data only.
    pub fn from_json(json: &serde_json::Value) -> Result<Self, RenderError> {
        let items = json.as_array().ok_or_else(|| {
            RenderError::InvalidArgument("expected a JSON array of objects".to_string())
        })?;

        let Some(first) = items.first() else {
            return Ok(TabularData::default());
        };
        let first = first.as_object().ok_or_else(|| {
            RenderError::InvalidArgument("expected a JSON array of objects".to_string())
        })?;

        let mut data = TabularData::new(first.keys().cloned());

        for item in items {
            let object = item.as_object().ok_or_else(|| {
                RenderError::InvalidArgument("expected a JSON array of objects".to_string())
            })?;
            let row = data
                .columns
                .iter()
                .map(|column| match object.get(column) {
                    Some(value) => json_to_value(value),
                    None => Ok(Value::Null),
                })
                .collect::<Result<Vec<_>, _>>()?;
            data.rows.push(row);
        }

        Ok(data)
    }

    /// Append a row. The cell count must match the column count.
    pub fn push_row(&mut self, cells: Vec<Value>) -> Result<(), RenderError> {
        if cells.len() != self.columns.len() {
            return Err(RenderError::InvalidArgument(format!(
                "row has {} cells but the table has {} columns",
                cells.len(),
                self.columns.len()
            )));
        }
        self.rows.push(cells);
        Ok(())
    }

    /// The column names, in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The rows, in insertion order.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The cell at `row` for the named column. Unknown columns and
    /// out-of-range rows yield [`Value::Null`].
    pub fn value(&self, row: usize, column: &str) -> Value {
        let Some(index) = self.columns.iter().position(|c| c == column) else {
            return Value::Null;
        };
        self.rows
            .get(row)
            .and_then(|cells| cells.get(index))
            .cloned()
            .unwrap_or(Value::Null)
    }

    /// A default-appearance schema built from the column names, ready for
    /// override resolution.
    pub(crate) fn schema(&self) -> Vec<Field> {
        self.columns.iter().map(Field::new).collect()
    }
}

fn json_to_value(json: &serde_json::Value) -> Result<Value, RenderError> {
    match json {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::UInt(u))
            } else {
                Ok(Value::Float(n.as_f64().unwrap_or(f64::NAN)))
            }
        }
        serde_json::Value::String(s) => Ok(Value::Text(s.clone())),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => Err(
            RenderError::InvalidArgument("nested JSON values are not supported".to_string()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_row_checks_arity() {
        let mut data = TabularData::new(["Id", "Name"]);
        assert!(data
            .push_row(vec![Value::Int(1), Value::from("Fry")])
            .is_ok());

        let err = data.push_row(vec![Value::Int(2)]).unwrap_err();
        assert!(matches!(err, RenderError::InvalidArgument(_)));
    }

    #[test]
    fn value_lookup_is_keyed_by_column_name() {
        let data = TabularData::from_rows(
            ["Id", "Name"],
            vec![vec![Value::Int(1), Value::from("Fry")]],
        )
        .unwrap();

        assert_eq!(data.value(0, "Name"), Value::Text("Fry".to_string()));
        assert_eq!(data.value(0, "Missing"), Value::Null);
        assert_eq!(data.value(7, "Id"), Value::Null);
    }

    #[test]
    fn from_json_array_of_objects() {
        let json = serde_json::json!([
            {"id": 1, "name": "Fry"},
            {"id": 2, "name": "Farnsworth"},
            {"id": 3}
        ]);
        let data = TabularData::from_json(&json).unwrap();
        assert_eq!(data.columns(), ["id", "name"]);
        assert_eq!(data.len(), 3);
        assert_eq!(data.value(1, "name"), Value::Text("Farnsworth".to_string()));
        // Missing key in a later object becomes Null.
        assert_eq!(data.value(2, "name"), Value::Null);
    }

    #[test]
    fn from_json_rejects_non_arrays_and_nesting() {
        let err = TabularData::from_json(&serde_json::json!({"id": 1})).unwrap_err();
        assert!(matches!(err, RenderError::InvalidArgument(_)));

        let err =
            TabularData::from_json(&serde_json::json!([{"id": {"nested": true}}])).unwrap_err();
        assert!(matches!(err, RenderError::InvalidArgument(_)));
    }

    #[test]
    fn from_json_empty_array_is_empty_table() {
        let data = TabularData::from_json(&serde_json::json!([])).unwrap();
        assert!(data.is_empty());
        assert!(data.columns().is_empty());
    }
}
