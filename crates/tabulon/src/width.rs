//! Column width calculation and padding.
//!
//! Widths are measured in Unicode display columns so that CJK and other
//! wide characters keep the box aligned. The maximum is taken over every
//! row's cell text for the column; the header row is one of those rows and
//! its texts are the display names, so a column is never narrower than its
//! header.

use unicode_width::UnicodeWidthStr;

use crate::record::Field;
use crate::row::Row;
use crate::types::TextAlign;

/// The computed width and alignment for one column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ColumnWidth {
    pub column: String,
    pub width: usize,
    pub align: TextAlign,
}

/// Computes the maximum display width per column over all rows.
pub(crate) fn column_widths(fields: &[Field], rows: &[Row]) -> Vec<ColumnWidth> {
    fields
        .iter()
        .map(|field| {
            let width = rows
                .iter()
                .flat_map(|row| row.values.iter())
                .filter(|value| value.column == field.name)
                .map(|value| display_width(&value.text))
                .max()
                .unwrap_or(0);
            ColumnWidth {
                column: field.name.clone(),
                width,
                align: field.appearance.align,
            }
        })
        .collect()
}

/// Display width of a string in terminal columns.
pub(crate) fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pads `s` on the right to the given display width.
pub(crate) fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Pads `s` on the left to the given display width.
pub(crate) fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", " ".repeat(pad), s)
}
