//! The record-shape capability trait.
//!
//! A [`Record`] exposes a static field schema and a by-name value accessor,
//! which is everything the rendering pipeline needs. The `#[derive(Record)]`
//! macro (enabled by the default `derive` feature) implements the trait
//! from a struct's named fields and `#[record(...)]` attributes; the trait
//! can also be implemented by hand for types the macro cannot reach.

use serde::{Deserialize, Serialize};

use crate::types::Appearance;
use crate::value::Value;

/// One field of a record shape: its source name plus display metadata.
///
/// The same type serves as schema entry and as resolved, render-ready
/// descriptor; resolution only rewrites the appearance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// The field's intrinsic name, used to look up values and to match
    /// override entries.
    pub name: String,
    /// Display metadata.
    pub appearance: Appearance,
}

impl Field {
    /// Create a field with the default appearance.
    pub fn new(name: impl Into<String>) -> Self {
        Field {
            name: name.into(),
            appearance: Appearance::default(),
        }
    }

    /// Replace the field's appearance.
    pub fn appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    /// The name shown in headers and listings: the appearance name when
    /// set and non-empty, otherwise the source name.
    pub fn display_name(&self) -> &str {
        self.appearance
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.name)
    }
}

/// A type whose instances can be rendered as table rows or key-value
/// listings.
pub trait Record {
    /// True when the implementor is itself a collection of records. The
    /// single-record operations refuse such shapes.
    const COLLECTION: bool = false;

    /// The record shape's fields, in declaration order.
    fn schema() -> Vec<Field>;

    /// The runtime value of the named field. Unknown names yield
    /// [`Value::Null`], which renders as an empty string.
    fn value(&self, field: &str) -> Value;
}

impl<T: Record> Record for Vec<T> {
    const COLLECTION: bool = true;

    fn schema() -> Vec<Field> {
        T::schema()
    }

    fn value(&self, _field: &str) -> Value {
        Value::Null
    }
}
