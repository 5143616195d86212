//! Error types for OxiText operations.
//!
//! Every codec in the workspace reports failures through [`OxiTextError`].
//! Failures are detected at the boundary of the component that owns the
//! data, before any partial output is returned.

use std::io;
use thiserror::Error;

/// The main error type for OxiText operations.
#[derive(Debug, Error)]
pub enum OxiTextError {
    /// I/O error from a file collaborator.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An argument had a value the operation cannot work with.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected argument.
        message: String,
    },

    /// A token cannot be expanded against the window it refers to.
    #[error("Malformed token #{index}: {message}")]
    MalformedToken {
        /// Index of the offending token in the token stream.
        index: usize,
        /// Description of the problem.
        message: String,
    },

    /// A bitstring that the code table could not have produced.
    #[error("Malformed bit stream at bit position {bit_position}")]
    MalformedStream {
        /// Position of the first bit that could not be decoded.
        bit_position: usize,
    },

    /// A code table that cannot be used for decoding.
    #[error("Invalid code table: {message}")]
    InvalidCodeTable {
        /// Description of the table defect.
        message: String,
    },

    /// A token field does not fit the single-digit flattening.
    #[error("Token {field} {value} does not fit in a single decimal digit")]
    EncodingRange {
        /// Name of the field (`offset` or `length`).
        field: &'static str,
        /// The out-of-range value.
        value: usize,
    },

    /// The final token ends with a literal space, which flattens exactly
    /// like an absent literal.
    #[error("Token #{index} ends the input with a literal space that cannot be told apart from no literal")]
    AmbiguousLiteral {
        /// Index of the offending token.
        index: usize,
    },

    /// A persisted document could not be understood.
    #[error("Invalid document: {message}")]
    Document {
        /// Description of the document error.
        message: String,
    },
}

/// Result type alias for OxiText operations.
pub type Result<T> = std::result::Result<T, OxiTextError>;

impl OxiTextError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a malformed token error.
    pub fn malformed_token(index: usize, message: impl Into<String>) -> Self {
        Self::MalformedToken {
            index,
            message: message.into(),
        }
    }

    /// Create a malformed stream error.
    pub fn malformed_stream(bit_position: usize) -> Self {
        Self::MalformedStream { bit_position }
    }

    /// Create an invalid code table error.
    pub fn invalid_code_table(message: impl Into<String>) -> Self {
        Self::InvalidCodeTable {
            message: message.into(),
        }
    }

    /// Create an encoding range error.
    pub fn encoding_range(field: &'static str, value: usize) -> Self {
        Self::EncodingRange { field, value }
    }

    /// Create an ambiguous literal error.
    pub fn ambiguous_literal(index: usize) -> Self {
        Self::AmbiguousLiteral { index }
    }

    /// Create a document error.
    pub fn document(message: impl Into<String>) -> Self {
        Self::Document {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OxiTextError::malformed_token(3, "offset 4 exceeds window of 2");
        assert!(err.to_string().contains("#3"));

        let err = OxiTextError::encoding_range("length", 12);
        assert!(err.to_string().contains("length 12"));

        let err = OxiTextError::malformed_stream(17);
        assert!(err.to_string().contains("17"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: OxiTextError = io_err.into();
        assert!(matches!(err, OxiTextError::Io(_)));
    }
}
