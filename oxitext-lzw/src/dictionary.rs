//! LZW dictionary (code table) management.

use crate::error::{LzwError, Result};
use std::collections::HashMap;

/// LZW dictionary for encoding and decoding.
///
/// Codes `0..initial.len()` are the single symbols of the initial dictionary;
/// every later code is a string learned while coding. Encoding also keeps a
/// reverse mapping (string -> code).
#[derive(Debug, Clone)]
pub struct LzwDictionary {
    /// Code table: code -> string.
    table: Vec<String>,
    /// Reverse lookup: string -> code.
    reverse: HashMap<String, usize>,
    /// Number of single-symbol entries.
    initial_len: usize,
}

impl LzwDictionary {
    /// Create a dictionary seeded with single-symbol entries.
    pub fn new(initial: &[char]) -> Result<Self> {
        let mut dict = Self {
            table: Vec::with_capacity(initial.len()),
            reverse: HashMap::with_capacity(initial.len()),
            initial_len: initial.len(),
        };

        for &symbol in initial {
            if dict.find_code(symbol.encode_utf8(&mut [0; 4])).is_some() {
                return Err(LzwError::DuplicateSymbol(symbol));
            }
            dict.add_string(symbol.to_string());
        }

        Ok(dict)
    }

    /// Drop every learned entry, keeping the single symbols.
    pub fn reset(&mut self) {
        for string in self.table.drain(self.initial_len..) {
            self.reverse.remove(&string);
        }
    }

    /// Add a string and return its code.
    ///
    /// A string that is already present keeps its first code in the reverse
    /// map, but still takes a new code so encoder and decoder stay in step.
    pub fn add_string(&mut self, string: String) -> usize {
        let code = self.table.len();
        self.reverse.entry(string.clone()).or_insert(code);
        self.table.push(string);
        code
    }

    /// Get the string for a code.
    pub fn get_string(&self, code: usize) -> Option<&str> {
        self.table.get(code).map(String::as_str)
    }

    /// Find the code for a string.
    pub fn find_code(&self, string: &str) -> Option<usize> {
        self.reverse.get(string).copied()
    }

    /// Get the next code that will be assigned.
    pub fn next_code(&self) -> usize {
        self.table.len()
    }

    /// Number of single-symbol entries.
    pub fn initial_len(&self) -> usize {
        self.initial_len
    }
}
