//! LZW-specific error types.

use oxitext_core::OxiTextError;
use thiserror::Error;

/// LZW compression/decompression errors.
#[derive(Debug, Error)]
pub enum LzwError {
    /// A code that is neither in the dictionary nor the next code to be
    /// defined.
    #[error("Invalid LZW code {code} at position {position}")]
    InvalidCode {
        /// The offending code.
        code: usize,
        /// Index of the code in the code stream.
        position: usize,
    },

    /// A symbol missing from the initial dictionary.
    #[error("Symbol {0:?} is not in the initial dictionary")]
    UnknownSymbol(char),

    /// The initial dictionary lists a symbol twice.
    #[error("Symbol {0:?} appears twice in the initial dictionary")]
    DuplicateSymbol(char),
}

/// Result type for LZW operations.
pub type Result<T> = std::result::Result<T, LzwError>;

impl From<LzwError> for OxiTextError {
    fn from(err: LzwError) -> Self {
        match err {
            LzwError::InvalidCode { position, .. } => {
                OxiTextError::malformed_token(position, err.to_string())
            }
            LzwError::UnknownSymbol(_) | LzwError::DuplicateSymbol(_) => {
                OxiTextError::invalid_argument(err.to_string())
            }
        }
    }
}
