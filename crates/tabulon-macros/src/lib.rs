//! Proc macros for `tabulon`.
//!
//! This crate provides the `#[derive(Record)]` macro, which turns a struct
//! with named fields into a renderable record shape: it generates the field
//! schema (including per-field `#[record(...)]` display metadata) and the
//! by-name value accessor used by the rendering pipeline.
//!
//! The macro is re-exported from the main `tabulon` crate when the `derive`
//! feature is enabled (the default), so most users never depend on this
//! crate directly.

mod attrs;
mod derive_record;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `tabulon::Record` trait for a struct with named fields.
///
/// Field appearance is controlled with the `#[record(...)]` attribute:
///
/// ```ignore
/// use tabulon::Record;
///
/// #[derive(Record)]
/// struct Person {
///     #[record(rename = "Id", align = "right")]
///     id: i64,
///
///     #[record(rename = "Name", encapsulate)]
///     name: String,
///
///     #[record(rename = "Date of birth", format = "yyyy-MM-dd", order = 1)]
///     birthday: chrono::NaiveDate,
///
///     #[record(ignore)]
///     internal_token: String,
/// }
/// ```
///
/// Supported keys: `rename = "..."`, `format = "..."`,
/// `align = "left" | "right" | "center"`, `order = <i32>`, and the flags
/// `ignore` and `encapsulate`.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive_record::record_derive_impl(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
