//! LZW encoder (compression).

use crate::dictionary::LzwDictionary;
use crate::error::{LzwError, Result};
use log::debug;

/// LZW encoder for compression.
#[derive(Debug)]
pub struct LzwEncoder {
    /// Dictionary for string lookup.
    dict: LzwDictionary,
}

impl LzwEncoder {
    /// Create a new encoder seeded with `initial` symbols.
    pub fn new(initial: &[char]) -> Result<Self> {
        let dict = LzwDictionary::new(initial)?;
        Ok(Self { dict })
    }

    /// Encode a message into dictionary codes.
    ///
    /// # Algorithm
    ///
    /// 1. Start from the single-symbol dictionary
    /// 2. Extend the current string while it stays in the dictionary
    /// 3. Output the code of the longest known string
    /// 4. Add that string + the next symbol to the dictionary
    /// 5. Restart from the next symbol
    pub fn encode(&mut self, message: &str) -> Result<Vec<usize>> {
        self.dict.reset();

        let mut codes = Vec::new();
        let mut symbols = message.chars();

        let Some(first) = symbols.next() else {
            return Ok(codes);
        };
        let mut current = self.symbol_string(first)?;

        for symbol in symbols {
            let mut candidate = current.clone();
            candidate.push(symbol);

            if self.dict.find_code(&candidate).is_some() {
                current = candidate;
                continue;
            }

            codes.push(self.code_for(&current)?);
            self.dict.add_string(candidate);
            current = self.symbol_string(symbol)?;
        }

        codes.push(self.code_for(&current)?);

        debug!(
            "LZW: {} symbols -> {} codes, {} dictionary entries",
            message.chars().count(),
            codes.len(),
            self.dict.next_code()
        );

        Ok(codes)
    }

    fn symbol_string(&self, symbol: char) -> Result<String> {
        let string = symbol.to_string();
        match self.dict.find_code(&string) {
            Some(_) => Ok(string),
            None => Err(LzwError::UnknownSymbol(symbol)),
        }
    }

    fn code_for(&self, string: &str) -> Result<usize> {
        // Every `current` string was found in the dictionary when it was built.
        self.dict.find_code(string).ok_or_else(|| {
            LzwError::UnknownSymbol(string.chars().next().unwrap_or_default())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_reference() {
        let mut encoder = LzwEncoder::new(&['a', 'b', 'c', 'd']).unwrap();
        let codes = encoder.encode("abacabadabacacacd").unwrap();
        assert_eq!(codes, vec![0, 1, 0, 2, 4, 0, 3, 8, 7, 12, 3]);
    }

    #[test]
    fn test_encoder_is_reusable() {
        let mut encoder = LzwEncoder::new(&['a', 'b']).unwrap();
        let first = encoder.encode("abababab").unwrap();
        let second = encoder.encode("abababab").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_symbol() {
        let mut encoder = LzwEncoder::new(&['a', 'b']).unwrap();
        let err = encoder.encode("abc").unwrap_err();
        assert!(matches!(err, LzwError::UnknownSymbol('c')));
    }
}
