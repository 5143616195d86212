//! LZ77 match finding over character sequences.
//!
//! This module implements the first stage of the OxiText pipeline. The input
//! is scanned left to right; at each position the longest run that can be
//! copied from a small trailing window is found and emitted as a
//! `(offset, length, next)` token.
//!
//! # Window
//!
//! The window holds the last `window_size` symbols (5 by default). Matches are
//! searched against the window read cyclically, so a run may walk past the
//! newest symbol and continue from the oldest one. Such tokens have
//! `offset < length` and expand to a repetition of the window.
//!
//! # Tokens
//!
//! - `(0, 0, c)`: literal `c` (first occurrence or no match)
//! - `(o, l, Some(c))`: copy `l` symbols starting `o` back, then literal `c`
//! - `(o, l, None)`: copy that reaches the end of the input

use log::{debug, trace};
use oxitext_core::error::{OxiTextError, Result};
use oxitext_core::{SymbolWindow, TextCodec, WindowedOutput};
use std::fmt;

/// Default window size in symbols.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// A token produced by LZ77 compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lz77Token {
    /// Distance back from the end of the window to the start of the run.
    pub offset: usize,
    /// Number of symbols copied from the window.
    pub length: usize,
    /// Literal following the copy, `None` if the copy ends the input.
    pub next: Option<char>,
}

impl Lz77Token {
    /// Create a token.
    pub const fn new(offset: usize, length: usize, next: Option<char>) -> Self {
        Self {
            offset,
            length,
            next,
        }
    }

    /// Create a pure literal token `(0, 0, symbol)`.
    pub const fn literal(symbol: char) -> Self {
        Self::new(0, 0, Some(symbol))
    }

    /// Check if this token carries no back-reference.
    pub fn is_literal(&self) -> bool {
        self.offset == 0 && self.length == 0
    }

    /// Number of symbols this token expands to.
    pub fn expanded_len(&self) -> usize {
        self.length + usize::from(self.next.is_some())
    }
}

impl fmt::Display for Lz77Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.next {
            Some(symbol) => write!(f, "({}, {}, {:?})", self.offset, self.length, symbol),
            None => write!(f, "({}, {}, None)", self.offset, self.length),
        }
    }
}

impl From<(usize, usize, Option<char>)> for Lz77Token {
    fn from((offset, length, next): (usize, usize, Option<char>)) -> Self {
        Self::new(offset, length, next)
    }
}

/// LZ77 configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lz77Config {
    /// Maximum number of trailing symbols a token may refer to.
    pub window_size: usize,
}

impl Lz77Config {
    /// Create a configuration with the given window size.
    pub const fn new(window_size: usize) -> Self {
        Self { window_size }
    }

    /// Reject configurations no window can be built for.
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(OxiTextError::invalid_argument(
                "window size must be a positive integer",
            ));
        }
        Ok(())
    }
}

impl Default for Lz77Config {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE)
    }
}

/// LZ77 encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lz77Encoder {
    config: Lz77Config,
}

impl Lz77Encoder {
    /// Create an encoder with the default window size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with a custom window size.
    pub fn with_window_size(window_size: usize) -> Self {
        Self {
            config: Lz77Config::new(window_size),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> Lz77Config {
        self.config
    }

    /// Compress a string into tokens.
    pub fn compress(&self, input: &str) -> Result<Vec<Lz77Token>> {
        let symbols: Vec<char> = input.chars().collect();
        self.compress_symbols(&symbols)
    }

    /// Compress a symbol sequence into tokens.
    pub fn compress_symbols(&self, input: &[char]) -> Result<Vec<Lz77Token>> {
        self.config.validate()?;

        let mut window = SymbolWindow::new(self.config.window_size)?;
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < input.len() {
            let (offset, length) = Self::find_match(&window, &input[pos..]);
            let next = input.get(pos + length).copied();
            let token = Lz77Token::new(offset, length, next);
            trace!("LZ77 token at {}: {}", pos, token);

            let consumed = token.expanded_len();
            window.extend(input[pos..pos + consumed].iter().copied());
            tokens.push(token);
            pos += consumed;
        }

        debug!(
            "LZ77: {} symbols -> {} tokens (window {})",
            input.len(),
            tokens.len(),
            self.config.window_size
        );

        Ok(tokens)
    }

    /// Find the longest cyclic match of `remaining` in the window.
    ///
    /// Returns `(offset, length)`, `(0, 0)` when nothing matches. The length
    /// is the longest cyclic match from any start. The start is anchored on
    /// the plain window: take the rightmost start of the longest prefix of
    /// the run that occurs without wrapping, then the first start at or after
    /// it whose cyclic read covers the whole run.
    fn find_match(window: &SymbolWindow, remaining: &[char]) -> (usize, usize) {
        let size = window.len();
        let length = (0..size)
            .map(|start| window.cyclic_match_len(start, remaining))
            .max()
            .unwrap_or(0);
        if length == 0 {
            return (0, 0);
        }

        let run = &remaining[..length];
        let prefix = (0..size)
            .map(|start| window.linear_match_len(start, run))
            .max()
            .unwrap_or(0);
        let anchor = (0..size)
            .rev()
            .find(|&start| window.linear_match_len(start, run) >= prefix)
            .unwrap_or(0);

        let covers = |start: &usize| window.cyclic_match_len(*start, run) >= length;
        let start = (anchor..size)
            .find(covers)
            .or_else(|| (0..anchor).rev().find(covers))
            .unwrap_or(anchor);

        (size - start, length)
    }

    /// Compress all data at once (convenience method).
    pub fn compress_all(input: &str, window_size: usize) -> Result<Vec<Lz77Token>> {
        Self::with_window_size(window_size).compress(input)
    }
}

/// LZ77 decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lz77Decoder {
    config: Lz77Config,
}

impl Lz77Decoder {
    /// Create a decoder with the default window size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with a custom window size.
    pub fn with_window_size(window_size: usize) -> Self {
        Self {
            config: Lz77Config::new(window_size),
        }
    }

    /// Expand tokens back into text.
    ///
    /// Each token is checked against the window before anything is copied:
    /// a copy needs `1 <= offset <= window length`, and no token may point
    /// further back than the window reaches.
    pub fn decompress(&self, tokens: &[Lz77Token]) -> Result<String> {
        self.config.validate()?;

        let mut out = WindowedOutput::new(self.config.window_size)?;

        for (index, token) in tokens.iter().enumerate() {
            let available = out.window().len();
            if token.offset > available {
                return Err(OxiTextError::malformed_token(
                    index,
                    format!(
                        "offset {} exceeds window of {} symbols",
                        token.offset, available
                    ),
                ));
            }

            if token.length > 0 {
                if token.offset == 0 {
                    return Err(OxiTextError::malformed_token(
                        index,
                        format!("length {} with zero offset", token.length),
                    ));
                }
                out.copy_run(token.offset, token.length)
                    .map_err(|e| OxiTextError::malformed_token(index, e.to_string()))?;
            }

            if let Some(symbol) = token.next {
                out.write_literal(symbol);
            }
        }

        debug!(
            "LZ77: {} tokens -> {} symbols (window {})",
            tokens.len(),
            out.output_len(),
            self.config.window_size
        );

        Ok(out.into_string())
    }

    /// Decompress all tokens at once (convenience method).
    pub fn decompress_all(tokens: &[Lz77Token], window_size: usize) -> Result<String> {
        Self::with_window_size(window_size).decompress(tokens)
    }
}

/// LZ77 as a [`TextCodec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Lz77Codec {
    config: Lz77Config,
}

impl Lz77Codec {
    /// Create a codec with a custom window size.
    pub fn with_window_size(window_size: usize) -> Self {
        Self {
            config: Lz77Config::new(window_size),
        }
    }
}

impl TextCodec for Lz77Codec {
    type Encoded = Vec<Lz77Token>;

    fn name(&self) -> &'static str {
        "lz77"
    }

    fn encode(&self, message: &str) -> Result<Vec<Lz77Token>> {
        compress(message, self.config.window_size)
    }

    fn decode(&self, encoded: &Vec<Lz77Token>) -> Result<String> {
        decompress(encoded, self.config.window_size)
    }
}

/// Compress `text` into LZ77 tokens using a window of `window_size` symbols.
pub fn compress(text: &str, window_size: usize) -> Result<Vec<Lz77Token>> {
    Lz77Encoder::compress_all(text, window_size)
}

/// Expand LZ77 tokens produced with the same `window_size`.
pub fn decompress(tokens: &[Lz77Token], window_size: usize) -> Result<String> {
    Lz77Decoder::decompress_all(tokens, window_size)
}
