//! The key-value list renderer.
//!
//! Emits one line per resolved field: a bullet or numbered marker, the
//! display name, an optional run of `.` fill so every value starts at the
//! same column, then `: ` and the formatted value. Single-record only; the
//! facade rejects collection shapes before this module runs.

use crate::error::RenderError;
use crate::format::format_value;
use crate::record::Record;
use crate::resolve::resolve_fields;
use crate::types::{ListOptions, ListStyle};
use crate::width::display_width;

pub(crate) fn render_list<T: Record>(
    record: &T,
    options: &ListOptions,
) -> Result<String, RenderError> {
    let fields = resolve_fields(T::schema(), &options.overrides);
    let longest = fields
        .iter()
        .map(|f| display_width(f.display_name()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (i, field) in fields.iter().enumerate() {
        let marker = match options.style {
            ListStyle::Bullets => "-".to_string(),
            ListStyle::Numbers => format!("{}.", i + 1),
        };
        let fill = if options.align_names {
            longest - display_width(field.display_name())
        } else {
            0
        };
        let value = format_value(&record.value(&field.name), &field.appearance, false, false)?;

        out.push_str(&marker);
        out.push(' ');
        out.push_str(field.display_name());
        out.push_str(&".".repeat(fill));
        out.push_str(": ");
        out.push_str(&value);
        out.push('\n');
    }

    Ok(out)
}
