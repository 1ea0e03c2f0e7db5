//! Field descriptor resolution.
//!
//! Turns a record shape's declared schema plus caller overrides into the
//! ordered list of fields to render. The ordering rule is the only one in
//! the system: sort by explicit `order` ascending, with the default
//! sentinel of `-1` meaning "no explicit order"; the sort is stable, so
//! equal orders keep their declaration order.

use crate::record::Field;
use crate::types::OverrideEntry;

/// Resolves a schema against a set of override entries.
///
/// A matching override (field name compared case-insensitively) replaces
/// the field's appearance wholesale. Overrides are applied before the
/// `ignore` filter, so an override can reinstate a field the shape itself
/// declares ignored. Unmatched override entries are ignored.
pub(crate) fn resolve_fields(mut fields: Vec<Field>, overrides: &[OverrideEntry]) -> Vec<Field> {
    if !overrides.is_empty() {
        for field in fields.iter_mut() {
            let entry = overrides
                .iter()
                .find(|o| o.field.eq_ignore_ascii_case(&field.name));
            if let Some(entry) = entry {
                field.appearance = entry.appearance.clone();
            }
        }
    }

    fields.retain(|f| !f.appearance.ignore);
    fields.sort_by_key(|f| f.appearance.order);
    fields
}
