//! The CSV renderer.
//!
//! CSV output is delimiter-joined with no padding; column widths are never
//! computed on this path. An empty record collection yields the empty
//! string — not even a header line — so that appending exports never
//! produces stray blank sections.
//!
//! Quoting on the typed path follows the precedence rule in
//! [`crate::format::format_value`]. The dynamic path cannot see field
//! types, so there the per-column `encapsulate` flag is the only quoting
//! control and the global text flag does not apply.

use crate::data::TabularData;
use crate::error::RenderError;
use crate::format::format_value;
use crate::record::Record;
use crate::resolve::resolve_fields;
use crate::types::RenderOptions;

pub(crate) fn render_csv<T: Record>(
    records: &[T],
    options: &RenderOptions,
) -> Result<String, RenderError> {
    if records.is_empty() {
        return Ok(String::new());
    }

    let fields = resolve_fields(T::schema(), &options.overrides);
    let mut content = String::new();

    if options.add_header {
        let mut header: Vec<String> = Vec::new();
        if options.print_row_numbers {
            header.push("Row".to_string());
        }
        header.extend(fields.iter().map(|f| f.display_name().to_string()));
        content.push_str(&header.join(&options.delimiter));
        content.push('\n');
    }

    for (i, record) in records.iter().enumerate() {
        let mut cells: Vec<String> = Vec::with_capacity(fields.len() + 1);
        if options.print_row_numbers {
            cells.push((i + 1).to_string());
        }
        for field in &fields {
            cells.push(format_value(
                &record.value(&field.name),
                &field.appearance,
                true,
                options.encapsulate_text,
            )?);
        }
        content.push_str(&cells.join(&options.delimiter));
        content.push('\n');
    }

    Ok(content)
}

pub(crate) fn render_csv_data(
    data: &TabularData,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    if data.is_empty() {
        return Ok(String::new());
    }

    let fields = resolve_fields(data.schema(), &options.overrides);
    let mut content = String::new();

    if options.add_header {
        let mut header: Vec<String> = Vec::new();
        if options.print_row_numbers {
            header.push("Row".to_string());
        }
        header.extend(fields.iter().map(|f| f.display_name().to_string()));
        content.push_str(&header.join(&options.delimiter));
        content.push('\n');
    }

    for row in 0..data.len() {
        let mut cells: Vec<String> = Vec::with_capacity(fields.len() + 1);
        if options.print_row_numbers {
            cells.push((row + 1).to_string());
        }
        for field in &fields {
            // No typed-text detection here, so the per-column encapsulate
            // flag is the only quoting control.
            cells.push(format_value(
                &data.value(row, &field.name),
                &field.appearance,
                true,
                false,
            )?);
        }
        content.push_str(&cells.join(&options.delimiter));
        content.push('\n');
    }

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Field;
    use crate::types::Appearance;
    use crate::value::Value;

    struct Crew {
        id: i64,
        name: String,
    }

    impl Record for Crew {
        fn schema() -> Vec<Field> {
            vec![
                Field::new("id").appearance(Appearance::new().rename("Id")),
                Field::new("name").appearance(Appearance::new().rename("Name")),
            ]
        }

        fn value(&self, field: &str) -> Value {
            match field {
                "id" => Value::Int(self.id),
                "name" => Value::Text(self.name.clone()),
                _ => Value::Null,
            }
        }
    }

    fn crew() -> Vec<Crew> {
        [
            (1, "Fry"),
            (2, "Farnsworth"),
            (3, "Zoidberg"),
            (4, "Rodriguez"),
        ]
        .into_iter()
        .map(|(id, name)| Crew {
            id,
            name: name.to_string(),
        })
        .collect()
    }

    #[test]
    fn default_csv_output() {
        let text = render_csv(&crew(), &RenderOptions::csv()).unwrap();
        assert_eq!(
            text,
            "Id;Name\n1;Fry\n2;Farnsworth\n3;Zoidberg\n4;Rodriguez\n"
        );
    }

    #[test]
    fn empty_collection_is_the_empty_string() {
        let records: Vec<Crew> = Vec::new();
        let text = render_csv(&records, &RenderOptions::csv()).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn header_can_be_omitted() {
        let text = render_csv(&crew(), &RenderOptions::csv().without_header()).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("1;Fry\n"));
    }

    #[test]
    fn custom_delimiter_and_row_numbers() {
        let options = RenderOptions::csv().delimiter(",").row_numbers();
        let text = render_csv(&crew(), &options).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Row,Id,Name");
        assert_eq!(lines[1], "1,1,Fry");
        assert_eq!(lines[4], "4,4,Rodriguez");
    }

    #[test]
    fn global_text_quoting() {
        let options = RenderOptions::csv().encapsulate_text();
        let text = render_csv(&crew(), &options).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "1;\"Fry\"");
        assert_eq!(lines[2], "2;\"Farnsworth\"");
    }
}
