//! LZ77 + Huffman composition.
//!
//! LZ77 tokens are flattened into one symbol stream, three symbols per token:
//!
//! ```text
//! offset digit | length digit | next symbol (' ' when absent)
//! ```
//!
//! and the stream is Huffman-coded. Decoding Huffman-decodes, regroups the
//! stream into triples and expands the tokens.
//!
//! # Limits
//!
//! The triples carry no delimiters, so offsets and lengths must be single
//! decimal digits. Keeping `window_size <= 9` bounds offsets; lengths depend
//! on the input. Encoding fails with [`OxiTextError::EncodingRange`] instead of
//! producing a stream that would decode to something else.
//!
//! A space only stands for "absent" in the final triple, since only the last
//! token can lack a literal. An input whose final token carries a literal
//! space is rejected with [`OxiTextError::AmbiguousLiteral`].

use crate::huffman::{self, CodeTable, EncodedText};
use crate::lz77::{Lz77Config, Lz77Decoder, Lz77Encoder, Lz77Token};
use log::debug;
use oxitext_core::TextCodec;
use oxitext_core::error::{OxiTextError, Result};

/// Symbols per flattened token.
pub const FIELDS_PER_TOKEN: usize = 3;

/// Stand-in for an absent literal in the flattened stream.
pub const ABSENT_MARKER: char = ' ';

/// Largest offset or length a flattened token can carry.
pub const MAX_FIELD_VALUE: usize = 9;

/// Flatten tokens into the symbol stream fed to the entropy coder.
pub fn flatten_tokens(tokens: &[Lz77Token]) -> Result<String> {
    let mut flat = String::with_capacity(tokens.len() * FIELDS_PER_TOKEN);

    for (index, token) in tokens.iter().enumerate() {
        let last = index + 1 == tokens.len();

        flat.push(field_digit("offset", token.offset)?);
        flat.push(field_digit("length", token.length)?);
        flat.push(match token.next {
            Some(ABSENT_MARKER) if last => {
                return Err(OxiTextError::ambiguous_literal(index));
            }
            Some(symbol) => symbol,
            None => ABSENT_MARKER,
        });
    }

    Ok(flat)
}

/// Regroup a flattened symbol stream into tokens.
pub fn unflatten_tokens(flat: &str) -> Result<Vec<Lz77Token>> {
    let symbols: Vec<char> = flat.chars().collect();
    if symbols.len() % FIELDS_PER_TOKEN != 0 {
        return Err(OxiTextError::malformed_token(
            symbols.len() / FIELDS_PER_TOKEN,
            format!(
                "stream of {} symbols does not split into triples",
                symbols.len()
            ),
        ));
    }

    let count = symbols.len() / FIELDS_PER_TOKEN;
    symbols
        .chunks_exact(FIELDS_PER_TOKEN)
        .enumerate()
        .map(|(index, group)| {
            let offset = parse_field(index, "offset", group[0])?;
            let length = parse_field(index, "length", group[1])?;
            let next = match group[2] {
                ABSENT_MARKER if index + 1 == count => None,
                symbol => Some(symbol),
            };
            Ok(Lz77Token::new(offset, length, next))
        })
        .collect()
}

fn field_digit(field: &'static str, value: usize) -> Result<char> {
    if value > MAX_FIELD_VALUE {
        return Err(OxiTextError::encoding_range(field, value));
    }
    char::from_digit(value as u32, 10).ok_or_else(|| OxiTextError::encoding_range(field, value))
}

fn parse_field(index: usize, field: &str, symbol: char) -> Result<usize> {
    symbol
        .to_digit(10)
        .map(|d| d as usize)
        .ok_or_else(|| {
            OxiTextError::malformed_token(index, format!("{} {:?} is not a digit", field, symbol))
        })
}

/// The composed LZ77 + Huffman coder.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deflater {
    config: Lz77Config,
}

impl Deflater {
    /// Create a deflater with the default window size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deflater with a custom window size.
    pub fn with_window_size(window_size: usize) -> Self {
        Self {
            config: Lz77Config::new(window_size),
        }
    }

    /// Window size used by the LZ77 stage.
    pub fn window_size(&self) -> usize {
        self.config.window_size
    }

    /// Compress a message to a bitstring and its code table.
    pub fn compress(&self, message: &str) -> Result<EncodedText> {
        let tokens = Lz77Encoder::with_window_size(self.config.window_size).compress(message)?;
        let flat = flatten_tokens(&tokens)?;
        let (bits, table) = huffman::encode(&flat);

        debug!(
            "Deflate: {} tokens, {} flat symbols, {} codes, {} bits",
            tokens.len(),
            flat.chars().count(),
            table.len(),
            bits.len()
        );

        Ok(EncodedText { bits, table })
    }

    /// Decompress a bitstring produced by [`Deflater::compress`] with the
    /// same window size.
    pub fn decompress(&self, bits: &str, table: &CodeTable) -> Result<String> {
        self.config.validate()?;

        let flat = huffman::decode(bits, table)?;
        let tokens = unflatten_tokens(&flat)?;
        Lz77Decoder::with_window_size(self.config.window_size).decompress(&tokens)
    }
}

impl TextCodec for Deflater {
    type Encoded = EncodedText;

    fn name(&self) -> &'static str {
        "deflate"
    }

    fn encode(&self, message: &str) -> Result<EncodedText> {
        self.compress(message)
    }

    fn decode(&self, encoded: &EncodedText) -> Result<String> {
        self.decompress(&encoded.bits, &encoded.table)
    }
}

/// Encode `message` with LZ77 (window of `window_size`) followed by Huffman.
pub fn deflate_encode(message: &str, window_size: usize) -> Result<(String, CodeTable)> {
    Ok(Deflater::with_window_size(window_size)
        .compress(message)?
        .into_parts())
}

/// Decode the output of [`deflate_encode`].
pub fn deflate_decode(bits: &str, table: &CodeTable, window_size: usize) -> Result<String> {
    Deflater::with_window_size(window_size).decompress(bits, table)
}
