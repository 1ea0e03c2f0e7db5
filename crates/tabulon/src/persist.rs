//! File persistence for rendered output.
//!
//! These are thin wrappers: render in memory, encode, write the bytes to
//! the target path (fully overwriting any existing file). Write failures
//! propagate unmodified as [`RenderError::Io`]; nothing is retried and no
//! partial-write cleanup is attempted. The `async` feature adds
//! non-blocking variants backed by `tokio::fs`.

use std::path::Path;

use crate::data::TabularData;
use crate::error::RenderError;
use crate::record::Record;
use crate::render::{
    render_data_table, render_key_value_list, render_key_value_table, render_table,
};
use crate::types::{ListOptions, RenderOptions, TextEncoding};

/// Renders a record collection and writes it to `path`.
pub fn save_table<T: Record>(
    records: &[T],
    path: impl AsRef<Path>,
    options: &RenderOptions,
) -> Result<(), RenderError> {
    let text = render_table(records, options)?;
    write_encoded(path.as_ref(), &text, options.encoding)
}

/// Renders dynamic tabular data and writes it to `path`.
pub fn save_data_table(
    data: &TabularData,
    path: impl AsRef<Path>,
    options: &RenderOptions,
) -> Result<(), RenderError> {
    let text = render_data_table(data, options)?;
    write_encoded(path.as_ref(), &text, options.encoding)
}

/// Renders a single record as a key-value listing and writes it to `path`.
pub fn save_key_value_list<T: Record>(
    record: &T,
    path: impl AsRef<Path>,
    options: &ListOptions,
) -> Result<(), RenderError> {
    let text = render_key_value_list(record, options)?;
    write_encoded(path.as_ref(), &text, options.encoding)
}

/// Renders a single record as a Key/Value table and writes it to `path`.
pub fn save_key_value_table<T: Record>(
    record: &T,
    path: impl AsRef<Path>,
    options: &RenderOptions,
) -> Result<(), RenderError> {
    let text = render_key_value_table(record, options)?;
    write_encoded(path.as_ref(), &text, options.encoding)
}

/// Non-blocking variant of [`save_table`].
#[cfg(feature = "async")]
pub async fn save_table_async<T: Record>(
    records: &[T],
    path: impl AsRef<Path>,
    options: &RenderOptions,
) -> Result<(), RenderError> {
    let text = render_table(records, options)?;
    tokio::fs::write(path.as_ref(), encode(&text, options.encoding)).await?;
    Ok(())
}

/// Non-blocking variant of [`save_data_table`].
#[cfg(feature = "async")]
pub async fn save_data_table_async(
    data: &TabularData,
    path: impl AsRef<Path>,
    options: &RenderOptions,
) -> Result<(), RenderError> {
    let text = render_data_table(data, options)?;
    tokio::fs::write(path.as_ref(), encode(&text, options.encoding)).await?;
    Ok(())
}

/// Non-blocking variant of [`save_key_value_list`].
#[cfg(feature = "async")]
pub async fn save_key_value_list_async<T: Record>(
    record: &T,
    path: impl AsRef<Path>,
    options: &ListOptions,
) -> Result<(), RenderError> {
    let text = render_key_value_list(record, options)?;
    tokio::fs::write(path.as_ref(), encode(&text, options.encoding)).await?;
    Ok(())
}

/// Non-blocking variant of [`save_key_value_table`].
#[cfg(feature = "async")]
pub async fn save_key_value_table_async<T: Record>(
    record: &T,
    path: impl AsRef<Path>,
    options: &RenderOptions,
) -> Result<(), RenderError> {
    let text = render_key_value_table(record, options)?;
    tokio::fs::write(path.as_ref(), encode(&text, options.encoding)).await?;
    Ok(())
}

fn write_encoded(path: &Path, text: &str, encoding: TextEncoding) -> Result<(), RenderError> {
    std::fs::write(path, encode(text, encoding))?;
    Ok(())
}

/// Encodes text per the selected output encoding. The UTF-16 variants
/// carry a byte order mark, as does `Utf8Bom`.
fn encode(text: &str, encoding: TextEncoding) -> Vec<u8> {
    match encoding {
        TextEncoding::Utf8 => text.as_bytes().to_vec(),
        TextEncoding::Utf8Bom => {
            let mut bytes = vec![0xEF, 0xBB, 0xBF];
            bytes.extend_from_slice(text.as_bytes());
            bytes
        }
        TextEncoding::Utf16Le => {
            let mut bytes = vec![0xFF, 0xFE];
            for unit in text.encode_utf16() {
                bytes.extend_from_slice(&unit.to_le_bytes());
            }
            bytes
        }
        TextEncoding::Utf16Be => {
            let mut bytes = vec![0xFE, 0xFF];
            for unit in text.encode_utf16() {
                bytes.extend_from_slice(&unit.to_be_bytes());
            }
            bytes
        }
    }
}
