//! The rendering entry points.
//!
//! Every function here follows the same pipeline: resolve field
//! descriptors (schema plus overrides), materialize rows, compute column
//! widths, dispatch to the selected renderer, return the owned string.
//! Each call is a pure function of its arguments; nothing is cached or
//! shared between calls.

use crate::csv;
use crate::data::TabularData;
use crate::error::RenderError;
use crate::format::format_value;
use crate::list;
use crate::record::{Field, Record};
use crate::resolve::resolve_fields;
use crate::row::Row;
use crate::table;
use crate::types::{ListOptions, OutputFormat, RenderOptions};
use crate::value::Value;

/// Width of the leading `Row` column: at least the three characters of the
/// header text, grown to fit the largest row number.
fn row_column_width(next_id: usize) -> usize {
    next_id.to_string().len().max(3)
}

/// Renders a collection of records as a table in the selected output
/// format.
///
/// An empty collection renders a header-only table — except in CSV, where
/// it yields the empty string.
///
/// ```
/// use tabulon::{render_table, Record, RenderOptions};
///
/// #[derive(Record)]
/// struct Crew {
///     #[record(rename = "Id")]
///     id: i64,
///     #[record(rename = "Name")]
///     name: String,
/// }
///
/// let crew = vec![
///     Crew { id: 1, name: "Fry".into() },
///     Crew { id: 2, name: "Leela".into() },
/// ];
/// let table = render_table(&crew, &RenderOptions::new()).unwrap();
/// assert!(table.starts_with("+----+-------+"));
/// ```
pub fn render_table<T: Record>(
    records: &[T],
    options: &RenderOptions,
) -> Result<String, RenderError> {
    if options.output_format == OutputFormat::Csv {
        return csv::render_csv(records, options);
    }

    let fields = resolve_fields(T::schema(), &options.overrides);

    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(Row::header(&fields));

    let mut id = 1;
    for record in records {
        let texts = fields
            .iter()
            .map(|field| {
                format_value(&record.value(&field.name), &field.appearance, false, false)
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(Row::data(id, &fields, texts));
        id += 1;
    }

    let widths = crate::width::column_widths(&fields, &rows);
    Ok(table::render_table_text(
        options.output_format,
        options.print_row_numbers,
        row_column_width(id),
        &widths,
        &rows,
    ))
}

/// Renders dynamically-shaped tabular data as a table.
///
/// Same pipeline as [`render_table`], keyed by column name instead of a
/// typed accessor.
pub fn render_data_table(
    data: &TabularData,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    if options.output_format == OutputFormat::Csv {
        return csv::render_csv_data(data, options);
    }

    let fields = resolve_fields(data.schema(), &options.overrides);

    let mut rows = Vec::with_capacity(data.len() + 1);
    rows.push(Row::header(&fields));

    let mut id = 1;
    for index in 0..data.len() {
        let texts = fields
            .iter()
            .map(|field| {
                format_value(&data.value(index, &field.name), &field.appearance, false, false)
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(Row::data(id, &fields, texts));
        id += 1;
    }

    let widths = crate::width::column_widths(&fields, &rows);
    Ok(table::render_table_text(
        options.output_format,
        options.print_row_numbers,
        row_column_width(id),
        &widths,
        &rows,
    ))
}

/// Renders a single record as a bulleted or numbered key-value listing.
///
/// Returns [`RenderError::Unsupported`] when `T` is a collection shape;
/// collections belong in [`render_table`].
pub fn render_key_value_list<T: Record>(
    record: &T,
    options: &ListOptions,
) -> Result<String, RenderError> {
    ensure_single_record::<T>()?;
    list::render_list(record, options)
}

/// Renders a single record as a two-column Key/Value table, reusing the
/// table renderer.
///
/// Returns [`RenderError::Unsupported`] when `T` is a collection shape.
pub fn render_key_value_table<T: Record>(
    record: &T,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    ensure_single_record::<T>()?;

    let fields = resolve_fields(T::schema(), &options.overrides);
    let pairs = fields
        .iter()
        .map(|field| {
            Ok(KeyValuePair {
                key: field.display_name().to_string(),
                value: format_value(&record.value(&field.name), &field.appearance, false, false)?,
            })
        })
        .collect::<Result<Vec<_>, RenderError>>()?;

    // The overrides were applied to the outer shape above; the Key/Value
    // columns themselves are not overridable.
    let inner = RenderOptions {
        overrides: Vec::new(),
        ..options.clone()
    };
    render_table(&pairs, &inner)
}

fn ensure_single_record<T: Record>() -> Result<(), RenderError> {
    if T::COLLECTION {
        return Err(RenderError::Unsupported(
            "collection shapes cannot be rendered as a single record; use render_table instead"
                .to_string(),
        ));
    }
    Ok(())
}

/// A rendered field of a single record, fed back through the table
/// pipeline by [`render_key_value_table`].
struct KeyValuePair {
    key: String,
    value: String,
}

impl Record for KeyValuePair {
    fn schema() -> Vec<Field> {
        vec![Field::new("Key"), Field::new("Value")]
    }

    fn value(&self, field: &str) -> Value {
        match field {
            "Key" => Value::Text(self.key.clone()),
            "Value" => Value::Text(self.value.clone()),
            _ => Value::Null,
        }
    }
}
