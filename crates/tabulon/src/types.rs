//! Core configuration types for table and list rendering.
//!
//! This module defines the enums and option objects that control output:
//! alignment, output format, list style, per-field appearance, override
//! entries, and the two option structs. All of them are plain values owned
//! by the caller; the rendering core reads them and never mutates or
//! retains them.

use serde::{Deserialize, Serialize};

/// Text alignment within a column.
///
/// `Center` is honored only by the Markdown separator row; data cells in
/// the boxed renderer treat it like `Right`. This asymmetry is kept on
/// purpose.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
    /// Center text (Markdown separator only).
    Center,
}

/// The supported output formats for table rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Boxed ASCII table with `+`/`-` borders and `|` delimiters.
    #[default]
    Default,
    /// Markdown table with an alignment separator row.
    Markdown,
    /// Delimiter-separated values, one line per row.
    Csv,
}

/// Marker style for key-value list output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    /// `- ` bullet markers.
    #[default]
    Bullets,
    /// `1.`, `2.`, ... numbered markers.
    Numbers,
}

/// Output byte encoding for the persist operations.
///
/// Only the file-writing wrappers look at this; the in-memory renderers
/// always produce a Rust `String`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextEncoding {
    /// UTF-8 without a byte order mark.
    #[default]
    Utf8,
    /// UTF-8 with a byte order mark.
    Utf8Bom,
    /// UTF-16 little endian, with a byte order mark.
    Utf16Le,
    /// UTF-16 big endian, with a byte order mark.
    Utf16Be,
}

/// Display metadata for one field of a record shape.
///
/// An `Appearance` describes how a field is rendered: its display name,
/// format template, alignment, ordering, whether it is excluded, and
/// whether its CSV value is wrapped in quotes. Construct one with the
/// fluent methods:
///
/// ```
/// use tabulon::{Appearance, TextAlign};
///
/// let appearance = Appearance::new()
///     .rename("Date of birth")
///     .format("yyyy-MM-dd")
///     .align(TextAlign::Center)
///     .order(2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appearance {
    /// Display name override; the field's own name is used when absent.
    pub name: Option<String>,
    /// Format template, e.g. `N0` or `yyyy-MM-dd`.
    pub format: Option<String>,
    /// Column alignment.
    pub align: TextAlign,
    /// Exclude the field from every output. When set, the other settings
    /// are irrelevant.
    pub ignore: bool,
    /// Explicit ordering. Fields keep their declaration order relative to
    /// each other when left at the default sentinel of `-1`.
    pub order: i32,
    /// Wrap the CSV value in double quotes.
    pub encapsulate: bool,
}

impl Default for Appearance {
    fn default() -> Self {
        Appearance {
            name: None,
            format: None,
            align: TextAlign::Left,
            ignore: false,
            order: -1,
            encapsulate: false,
        }
    }
}

impl Appearance {
    /// Create an appearance with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display name.
    pub fn rename(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the format template.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set the alignment.
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Set alignment to right (shorthand for `.align(TextAlign::Right)`).
    pub fn right(self) -> Self {
        self.align(TextAlign::Right)
    }

    /// Set alignment to center (shorthand for `.align(TextAlign::Center)`).
    pub fn center(self) -> Self {
        self.align(TextAlign::Center)
    }

    /// Set the explicit ordering.
    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Exclude the field from every output.
    pub fn ignore(mut self) -> Self {
        self.ignore = true;
        self
    }

    /// Wrap the field's CSV value in double quotes.
    pub fn encapsulate(mut self) -> Self {
        self.encapsulate = true;
        self
    }
}

/// A caller-supplied appearance replacement for one field, matched
/// case-insensitively on the field's source name.
///
/// When an entry matches, it replaces the field's declared appearance
/// wholesale; the two are never merged setting-by-setting. Entries that
/// match no field are silently ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideEntry {
    /// Source name of the field to override.
    pub field: String,
    /// The replacement appearance.
    pub appearance: Appearance,
}

impl OverrideEntry {
    /// Create an override entry for the named field.
    pub fn new(field: impl Into<String>, appearance: Appearance) -> Self {
        OverrideEntry {
            field: field.into(),
            appearance,
        }
    }
}

/// Options for the table rendering operations.
///
/// A pure value object; every render call receives it by reference and the
/// core never mutates it. The defaults mirror the most common usage:
///
/// | Field               | Default    | Applies to |
/// |---------------------|------------|------------|
/// | `output_format`     | `Default`  | all        |
/// | `print_row_numbers` | `false`    | all        |
/// | `delimiter`         | `;`        | CSV        |
/// | `encoding`          | `Utf8`     | persist    |
/// | `add_header`        | `true`     | CSV        |
/// | `encapsulate_text`  | `false`    | CSV        |
/// | `overrides`         | empty      | all        |
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// The desired output format.
    pub output_format: OutputFormat,
    /// Add a leading `Row` column with 1-based row numbers.
    pub print_row_numbers: bool,
    /// Delimiter for CSV output.
    pub delimiter: String,
    /// Byte encoding used by the persist operations.
    pub encoding: TextEncoding,
    /// Emit a header line in CSV output.
    pub add_header: bool,
    /// Quote every text field in CSV output, regardless of the per-field
    /// `encapsulate` flag. Non-text fields are unaffected.
    pub encapsulate_text: bool,
    /// Per-field appearance overrides.
    pub overrides: Vec<OverrideEntry>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            output_format: OutputFormat::Default,
            print_row_numbers: false,
            delimiter: ";".to_string(),
            encoding: TextEncoding::Utf8,
            add_header: true,
            encapsulate_text: false,
            overrides: Vec::new(),
        }
    }
}

impl RenderOptions {
    /// Create options with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options preset to Markdown output.
    pub fn markdown() -> Self {
        Self::new().output_format(OutputFormat::Markdown)
    }

    /// Create options preset to CSV output.
    pub fn csv() -> Self {
        Self::new().output_format(OutputFormat::Csv)
    }

    /// Set the output format.
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Add a leading `Row` column with 1-based row numbers.
    pub fn row_numbers(mut self) -> Self {
        self.print_row_numbers = true;
        self
    }

    /// Set the CSV delimiter.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set the persist encoding.
    pub fn encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Omit the CSV header line.
    pub fn without_header(mut self) -> Self {
        self.add_header = false;
        self
    }

    /// Quote every text field in CSV output.
    pub fn encapsulate_text(mut self) -> Self {
        self.encapsulate_text = true;
        self
    }

    /// Add an appearance override for the named field.
    pub fn override_field(mut self, field: impl Into<String>, appearance: Appearance) -> Self {
        self.overrides.push(OverrideEntry::new(field, appearance));
        self
    }

    /// Set the full override list at once.
    pub fn overrides(mut self, overrides: impl IntoIterator<Item = OverrideEntry>) -> Self {
        self.overrides = overrides.into_iter().collect();
        self
    }
}

/// Options for the key-value list operations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListOptions {
    /// Bullet or numbered markers.
    pub style: ListStyle,
    /// Pad display names with trailing dots so every value column starts at
    /// the same offset.
    pub align_names: bool,
    /// Byte encoding used by the persist operations.
    pub encoding: TextEncoding,
    /// Per-field appearance overrides.
    pub overrides: Vec<OverrideEntry>,
}

impl ListOptions {
    /// Create options with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use numbered markers.
    pub fn numbered(mut self) -> Self {
        self.style = ListStyle::Numbers;
        self
    }

    /// Set the list style.
    pub fn style(mut self, style: ListStyle) -> Self {
        self.style = style;
        self
    }

    /// Dot-pad display names to a common width.
    pub fn align_names(mut self) -> Self {
        self.align_names = true;
        self
    }

    /// Set the persist encoding.
    pub fn encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Add an appearance override for the named field.
    pub fn override_field(mut self, field: impl Into<String>, appearance: Appearance) -> Self {
        self.overrides.push(OverrideEntry::new(field, appearance));
        self
    }

    /// Set the full override list at once.
    pub fn overrides(mut self, overrides: impl IntoIterator<Item = OverrideEntry>) -> Self {
        self.overrides = overrides.into_iter().collect();
        self
    }
}
