//! # OxiText-LZW: Character-level LZW
//!
//! Lempel-Ziv-Welch coding over Unicode scalar values. The dictionary starts
//! with the distinct symbols of the message in ascending order and grows by
//! one string per emitted code; codes are plain indices, no bit packing.
//!
//! ## Example
//!
//! ```rust
//! use oxitext_lzw::{compress, decompress, initial_dictionary};
//!
//! let message = "abacabadabacacacd";
//! let dictionary = initial_dictionary(message);
//! assert_eq!(dictionary, vec!['a', 'b', 'c', 'd']);
//!
//! let codes = compress(message).unwrap();
//! assert_eq!(codes, vec![0, 1, 0, 2, 4, 0, 3, 8, 7, 12, 3]);
//!
//! assert_eq!(decompress(&codes, &dictionary).unwrap(), message);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod decoder;
mod dictionary;
mod encoder;
mod error;

pub use decoder::LzwDecoder;
pub use dictionary::LzwDictionary;
pub use encoder::LzwEncoder;
pub use error::{LzwError, Result};

use oxitext_core::TextCodec;

/// Distinct symbols of `message`, sorted ascending.
pub fn initial_dictionary(message: &str) -> Vec<char> {
    let mut symbols: Vec<char> = message.chars().collect();
    symbols.sort_unstable();
    symbols.dedup();
    symbols
}

/// Compress `message` against its own [`initial_dictionary`].
pub fn compress(message: &str) -> Result<Vec<usize>> {
    LzwEncoder::new(&initial_dictionary(message))?.encode(message)
}

/// Decompress `codes` produced against `initial`.
pub fn decompress(codes: &[usize], initial: &[char]) -> Result<String> {
    LzwDecoder::new(initial)?.decode(codes)
}

/// Codes plus the initial dictionary needed to decode them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LzwEncoded {
    /// Emitted codes.
    pub codes: Vec<usize>,
    /// Single-symbol dictionary the codes index into.
    pub dictionary: Vec<char>,
}

/// LZW as a [`TextCodec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LzwCodec;

impl TextCodec for LzwCodec {
    type Encoded = LzwEncoded;

    fn name(&self) -> &'static str {
        "lzw"
    }

    fn encode(&self, message: &str) -> oxitext_core::Result<LzwEncoded> {
        let dictionary = initial_dictionary(message);
        let codes = LzwEncoder::new(&dictionary)?.encode(message)?;
        Ok(LzwEncoded { codes, dictionary })
    }

    fn decode(&self, encoded: &LzwEncoded) -> oxitext_core::Result<String> {
        Ok(decompress(&encoded.codes, &encoded.dictionary)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message() {
        assert!(initial_dictionary("").is_empty());
        assert!(compress("").unwrap().is_empty());
        assert_eq!(decompress(&[], &[]).unwrap(), "");
    }

    #[test]
    fn test_initial_dictionary_sorted() {
        assert_eq!(initial_dictionary("banana"), vec!['a', 'b', 'n']);
    }

    #[test]
    fn test_codec_verify() {
        let codec = LzwCodec;
        assert_eq!(codec.name(), "lzw");
        assert!(codec.verify("tobeornottobeortobeornot").unwrap());
    }

    #[test]
    fn test_codec_error_conversion() {
        let encoded = LzwEncoded {
            codes: vec![0, 9],
            dictionary: vec!['a'],
        };
        let err = LzwCodec.decode(&encoded).unwrap_err();
        assert!(matches!(
            err,
            oxitext_core::OxiTextError::MalformedToken { index: 1, .. }
        ));
    }
}
