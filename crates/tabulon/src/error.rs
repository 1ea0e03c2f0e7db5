//! Error types for rendering and persistence.
//!
//! This module provides [`RenderError`], the error type returned by every
//! fallible operation in the crate. Missing field values and unmatched
//! override entries are not errors (the former renders as an empty string,
//! the latter is ignored); everything else surfaces to the caller.

use thiserror::Error;

/// Error type for rendering and persistence operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A malformed argument, e.g. a dynamic row whose cell count does not
    /// match its column set.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A single-record operation was invoked on a collection shape.
    #[error("unsupported operation: {0}")]
    Unsupported(String),

    /// A format template cannot be applied to the field's runtime value.
    /// Deliberately fail-fast: falling back to an unformatted string would
    /// hide a caller configuration mistake.
    #[error("format template '{template}' cannot be applied to a {kind} value")]
    Format {
        /// The offending template.
        template: String,
        /// The kind of value it was applied to.
        kind: &'static str,
    },

    /// I/O failure from a persist operation. Propagated unmodified, no
    /// retries, no partial-write cleanup.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RenderError::Format {
            template: "yyyy-MM-dd".to_string(),
            kind: "integer",
        };
        assert!(err.to_string().contains("yyyy-MM-dd"));
        assert!(err.to_string().contains("integer"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RenderError = io_err.into();
        assert!(matches!(err, RenderError::Io(_)));
    }
}
