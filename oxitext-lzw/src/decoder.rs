//! LZW decoder (decompression).

use crate::dictionary::LzwDictionary;
use crate::error::{LzwError, Result};
use log::debug;

/// LZW decoder for decompression.
#[derive(Debug)]
pub struct LzwDecoder {
    /// Dictionary for code lookup.
    dict: LzwDictionary,
}

impl LzwDecoder {
    /// Create a new decoder seeded with `initial` symbols.
    pub fn new(initial: &[char]) -> Result<Self> {
        let dict = LzwDictionary::new(initial)?;
        Ok(Self { dict })
    }

    /// Decode dictionary codes back into text.
    ///
    /// The decoder learns each entry one code after the encoder did, so a code
    /// may name the entry that is about to be defined ("KwKwK"). Its string is
    /// the previous string plus its own first symbol.
    pub fn decode(&mut self, codes: &[usize]) -> Result<String> {
        self.dict.reset();

        let mut output = String::new();
        let mut prev: Option<String> = None;

        for (position, &code) in codes.iter().enumerate() {
            let string = match (self.dict.get_string(code), &prev) {
                (Some(known), _) => known.to_string(),
                (None, Some(prev_string)) if code == self.dict.next_code() => {
                    let mut string = prev_string.clone();
                    string.extend(prev_string.chars().next());
                    string
                }
                _ => return Err(LzwError::InvalidCode { code, position }),
            };

            output.push_str(&string);

            if let Some(prev_string) = prev.take() {
                let mut entry = prev_string;
                entry.extend(string.chars().next());
                self.dict.add_string(entry);
            }

            prev = Some(string);
        }

        debug!(
            "LZW: {} codes -> {} symbols",
            codes.len(),
            output.chars().count()
        );

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_reference() {
        let mut decoder = LzwDecoder::new(&['a', 'b', 'c', 'd']).unwrap();
        let text = decoder
            .decode(&[0, 1, 0, 2, 4, 0, 3, 8, 7, 12, 3])
            .unwrap();
        assert_eq!(text, "abacabadabacacacd");
    }

    #[test]
    fn test_decode_kwkwk() {
        // "aaaa": codes a, then "aa" before the decoder has learned it.
        let mut decoder = LzwDecoder::new(&['a']).unwrap();
        assert_eq!(decoder.decode(&[0, 1, 0]).unwrap(), "aaaa");
    }

    #[test]
    fn test_decode_invalid_code() {
        let mut decoder = LzwDecoder::new(&['a', 'b']).unwrap();
        let err = decoder.decode(&[0, 7]).unwrap_err();
        assert!(matches!(err, LzwError::InvalidCode { code: 7, position: 1 }));
    }

    #[test]
    fn test_decode_undefined_first_code() {
        let mut decoder = LzwDecoder::new(&['a']).unwrap();
        let err = decoder.decode(&[1]).unwrap_err();
        assert!(matches!(err, LzwError::InvalidCode { code: 1, position: 0 }));
    }
}
