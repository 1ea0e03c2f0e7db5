//! The boxed-ASCII and Markdown table renderers.
//!
//! Both share the same materialized rows and column widths and differ only
//! in framing: the boxed renderer draws `+`/`-` borders above and below,
//! while Markdown replaces the separator with an alignment row and has no
//! outer borders. Every cell gets one space of margin on each side.
//!
//! Data cells pad per the column alignment, where `Center` behaves like
//! `Right`; only the Markdown separator row distinguishes the two. Header
//! cells are always left-aligned.

use crate::row::Row;
use crate::types::{OutputFormat, TextAlign};
use crate::width::{pad_left, pad_right, ColumnWidth};

/// Renders the non-CSV table formats from materialized rows.
///
/// `row_col_width` is the width of the optional leading `Row` column.
pub(crate) fn render_table_text(
    format: OutputFormat,
    print_row_numbers: bool,
    row_col_width: usize,
    widths: &[ColumnWidth],
    rows: &[Row],
) -> String {
    let mut out = String::new();

    if format == OutputFormat::Default {
        out.push_str(&border_line(format, print_row_numbers, row_col_width, widths));
        out.push('\n');
    }

    match rows.iter().find(|r| r.header) {
        Some(header) => {
            out.push_str(&value_line(print_row_numbers, row_col_width, widths, header, true));
        }
        None => out.push_str(&fallback_header_line(widths)),
    }
    out.push('\n');

    // Separator: a border for the boxed table, the alignment row for Markdown.
    out.push_str(&border_line(format, print_row_numbers, row_col_width, widths));
    out.push('\n');

    let mut data_rows: Vec<&Row> = rows.iter().filter(|r| !r.header).collect();
    data_rows.sort_by_key(|r| r.id);
    for row in data_rows {
        out.push_str(&value_line(print_row_numbers, row_col_width, widths, row, false));
        out.push('\n');
    }

    if format == OutputFormat::Default {
        out.push_str(&border_line(format, print_row_numbers, row_col_width, widths));
        out.push('\n');
    }

    out
}

/// A border line (`+---+---+`) or, for Markdown, the alignment separator
/// row (`|:---|---:|`). Each segment spans the column width plus the
/// two-space cell margin.
fn border_line(
    format: OutputFormat,
    print_row_numbers: bool,
    row_col_width: usize,
    widths: &[ColumnWidth],
) -> String {
    let markdown = format == OutputFormat::Markdown;
    let edge = if markdown { "|" } else { "+" };

    let mut line = String::from(edge);

    if print_row_numbers {
        if markdown {
            // The row-number column is always numeric, so always right-aligned.
            line.push_str(&"-".repeat(row_col_width));
            line.push_str("-:|");
        } else {
            line.push_str(&"-".repeat(row_col_width + 2));
            line.push('+');
        }
    }

    for entry in widths {
        if markdown {
            match entry.align {
                TextAlign::Left => {
                    line.push(':');
                    line.push_str(&"-".repeat(entry.width + 1));
                }
                TextAlign::Right => {
                    line.push_str(&"-".repeat(entry.width));
                    line.push_str("-:");
                }
                TextAlign::Center => {
                    line.push(':');
                    line.push_str(&"-".repeat(entry.width));
                    line.push(':');
                }
            }
            line.push('|');
        } else {
            line.push_str(&"-".repeat(entry.width + 2));
            line.push('+');
        }
    }

    line
}

/// A header or data line: `| cell | cell |`.
fn value_line(
    print_row_numbers: bool,
    row_col_width: usize,
    widths: &[ColumnWidth],
    row: &Row,
    header: bool,
) -> String {
    let mut line = String::from("|");

    if print_row_numbers {
        let cell = if header {
            pad_right("Row", row_col_width)
        } else {
            pad_left(&row.id.to_string(), row_col_width)
        };
        line.push(' ');
        line.push_str(&cell);
        line.push_str(" |");
    }

    for entry in widths {
        let Some(value) = row.get(&entry.column) else {
            continue;
        };

        let cell = if header {
            pad_right(&value.text, entry.width)
        } else {
            match entry.align {
                TextAlign::Left => pad_right(&value.text, entry.width),
                // Center pads like Right everywhere but the Markdown separator.
                TextAlign::Right | TextAlign::Center => pad_left(&value.text, entry.width),
            }
        };

        line.push(' ');
        line.push_str(&cell);
        line.push_str(" |");
    }

    line
}

/// Header built from the width entries' column names, for row sets that
/// carry no header row.
fn fallback_header_line(widths: &[ColumnWidth]) -> String {
    let mut line = String::from("|");
    for entry in widths {
        line.push(' ');
        line.push_str(&pad_right(&entry.column, entry.width));
        line.push_str(" |");
    }
    line
}
