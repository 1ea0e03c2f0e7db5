//! # Tabulon — record collections as tables, CSV, and listings
//!
//! `tabulon` converts in-memory collections of uniformly-shaped records
//! into text: boxed ASCII tables, Markdown tables, CSV, and bulleted or
//! numbered key-value listings. It is meant for applications that need to
//! print or export structured data without a full reporting engine.
//!
//! ## Core Concepts
//!
//! - [`Record`]: the capability trait for renderable shapes — a static
//!   field schema plus a by-name value accessor. Derive it with
//!   `#[derive(Record)]` (default `derive` feature).
//! - [`Appearance`]: per-field display metadata — name, format template,
//!   alignment, ordering, visibility, CSV quoting.
//! - [`RenderOptions`] / [`ListOptions`]: immutable per-call configuration.
//!   All state flows through these arguments; render calls share nothing
//!   and are freely concurrent.
//! - [`TabularData`]: the column-name-keyed path for dynamically-shaped
//!   input.
//!
//! ## Quick Start
//!
//! ```
//! use tabulon::{render_table, Record, RenderOptions};
//!
//! #[derive(Record)]
//! struct Crew {
//!     #[record(rename = "Id", align = "right")]
//!     id: i64,
//!     #[record(rename = "Name")]
//!     name: String,
//! }
//!
//! let crew = vec![
//!     Crew { id: 1, name: "Fry".into() },
//!     Crew { id: 2, name: "Farnsworth".into() },
//! ];
//!
//! let table = render_table(&crew, &RenderOptions::new()).unwrap();
//! assert_eq!(table, "\
//! +----+------------+
//! | Id | Name       |
//! +----+------------+
//! |  1 | Fry        |
//! |  2 | Farnsworth |
//! +----+------------+
//! ");
//!
//! let csv = render_table(&crew, &RenderOptions::csv()).unwrap();
//! assert_eq!(csv, "Id;Name\n1;Fry\n2;Farnsworth\n");
//! ```
//!
//! ## Appearance overrides
//!
//! Call-site overrides reshape a field's appearance without touching the
//! record type. A matching override replaces the declared appearance
//! wholesale:
//!
//! ```
//! use tabulon::{render_table, Appearance, Record, RenderOptions};
//!
//! #[derive(Record)]
//! struct Crew {
//!     id: i64,
//!     name: String,
//! }
//!
//! let crew = vec![Crew { id: 1, name: "Fry".into() }];
//! let options = RenderOptions::new()
//!     .override_field("name", Appearance::new().rename("Crew member"));
//! let table = render_table(&crew, &options).unwrap();
//! assert!(table.contains("Crew member"));
//! ```
//!
//! ## Single records
//!
//! [`render_key_value_list`] and [`render_key_value_table`] render one
//! record's fields as lines or as a two-column table. Both refuse
//! collection shapes with [`RenderError::Unsupported`].
//!
//! ## Persistence
//!
//! The `save_*` functions render and then write the encoded bytes to a
//! path, overwriting any existing file. With the `async` feature the
//! `save_*_async` variants do the same through `tokio::fs`.

mod csv;
mod format;
mod list;
mod resolve;
mod row;
mod table;
mod width;

pub mod data;
pub mod error;
pub mod persist;
pub mod record;
pub mod render;
pub mod types;
pub mod value;

pub use data::TabularData;
pub use error::RenderError;
pub use persist::{save_data_table, save_key_value_list, save_key_value_table, save_table};
pub use record::{Field, Record};
pub use render::{render_data_table, render_key_value_list, render_key_value_table, render_table};
pub use types::{
    Appearance, ListOptions, ListStyle, OutputFormat, OverrideEntry, RenderOptions, TextAlign,
    TextEncoding,
};
pub use value::{ToValue, Value};

#[cfg(feature = "async")]
pub use persist::{
    save_data_table_async, save_key_value_list_async, save_key_value_table_async, save_table_async,
};

/// Derives [`Record`] for a struct with named fields.
///
/// See the trait documentation for the supported `#[record(...)]` keys.
#[cfg(feature = "derive")]
pub use tabulon_macros::Record;
