//! Huffman coding over character sequences.
//!
//! Codes are built from symbol frequencies with the classic bottom-up merge:
//! the two lightest nodes are repeatedly joined under a new internal node
//! until one root remains. Walking the finished tree gives every symbol a
//! string of `'0'`/`'1'`, with `'0'` for the first-merged child.
//!
//! # Determinism
//!
//! The priority queue is keyed on `(frequency, sequence)`. Leaves get
//! sequence numbers in ascending symbol order and internal nodes get the next
//! numbers in merge order, so equal frequencies always resolve the same way.
//! The resulting code is not canonical; the table has to travel with the
//! bitstring.
//!
//! # Degenerate inputs
//!
//! - Empty message: empty table, empty bitstring
//! - One distinct symbol: that symbol is coded as `"0"`

use log::{debug, trace};
use oxitext_core::error::{OxiTextError, Result};
use oxitext_core::TextCodec;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashMap, HashSet};

/// Code used when the message has a single distinct symbol.
pub const SINGLE_SYMBOL_CODE: &str = "0";

/// Symbol to bit-code mapping produced by the entropy coder.
///
/// Tables built here or through [`CodeTable::from_entries`] are always
/// prefix-free and never contain an empty code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, String>,
}

impl CodeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(symbol, code)` pairs, e.g. one read back from disk.
    ///
    /// Rejects empty codes, characters other than `'0'`/`'1'`, repeated
    /// symbols, repeated codes and tables that are not prefix-free.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, String)>,
    {
        let mut codes = BTreeMap::new();
        let mut seen = HashSet::new();

        for (symbol, code) in entries {
            if code.is_empty() {
                return Err(OxiTextError::invalid_code_table(format!(
                    "empty code for {:?}",
                    symbol
                )));
            }
            if !code.bytes().all(|b| b == b'0' || b == b'1') {
                return Err(OxiTextError::invalid_code_table(format!(
                    "code {:?} for {:?} is not a bit string",
                    code, symbol
                )));
            }
            if !seen.insert(code.clone()) {
                return Err(OxiTextError::invalid_code_table(format!(
                    "code {:?} assigned twice",
                    code
                )));
            }
            if codes.insert(symbol, code).is_some() {
                return Err(OxiTextError::invalid_code_table(format!(
                    "symbol {:?} listed twice",
                    symbol
                )));
            }
        }

        let table = Self { codes };
        if !table.is_prefix_free() {
            return Err(OxiTextError::invalid_code_table("codes are not prefix-free"));
        }
        Ok(table)
    }

    /// Get the code for a symbol.
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over `(symbol, code)` in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_str()))
    }

    /// Length of the longest code, 0 for an empty table.
    pub fn max_code_length(&self) -> usize {
        self.codes.values().map(String::len).max().unwrap_or(0)
    }

    /// Check that no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&str> = self.codes.values().map(String::as_str).collect();
        codes.sort_unstable();
        // In lexicographic order a prefix sorts directly before its extensions.
        codes.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }

    /// Encode a message, failing on symbols missing from the table.
    pub fn encode(&self, message: &str) -> Result<String> {
        let mut bits = String::new();
        for (index, symbol) in message.chars().enumerate() {
            let code = self.get(symbol).ok_or_else(|| {
                OxiTextError::invalid_argument(format!(
                    "symbol {:?} at {} has no code",
                    symbol, index
                ))
            })?;
            bits.push_str(code);
        }
        Ok(bits)
    }
}

/// A node of the code tree.
#[derive(Debug, Clone, Copy)]
enum Node {
    Leaf { symbol: char, freq: u64 },
    Internal { left: usize, right: usize, freq: u64 },
}

impl Node {
    fn freq(&self) -> u64 {
        match *self {
            Node::Leaf { freq, .. } | Node::Internal { freq, .. } => freq,
        }
    }
}

/// Builder for Huffman code tables from symbol frequencies.
#[derive(Debug, Clone, Default)]
pub struct HuffmanBuilder {
    frequencies: BTreeMap<char, u64>,
}

impl HuffmanBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol occurrence.
    pub fn add(&mut self, symbol: char) {
        self.add_count(symbol, 1);
    }

    /// Add multiple occurrences of a symbol.
    pub fn add_count(&mut self, symbol: char, count: u64) {
        if count > 0 {
            *self.frequencies.entry(symbol).or_insert(0) += count;
        }
    }

    /// Add every symbol of a message.
    pub fn add_text(&mut self, message: &str) {
        for symbol in message.chars() {
            self.add(symbol);
        }
    }

    /// Accumulated frequencies.
    pub fn frequencies(&self) -> &BTreeMap<char, u64> {
        &self.frequencies
    }

    /// Build the code tree. Returns the node arena and the root index.
    ///
    /// Arena indices double as the tie-break sequence: leaves come first in
    /// symbol order, then internal nodes in the order they are created.
    fn build_tree(&self) -> Option<(Vec<Node>, usize)> {
        let mut nodes: Vec<Node> = self
            .frequencies
            .iter()
            .map(|(&symbol, &freq)| Node::Leaf { symbol, freq })
            .collect();

        let mut heap: BinaryHeap<Reverse<(u64, usize)>> = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| Reverse((node.freq(), i)))
            .collect();

        while heap.len() > 1 {
            let Reverse((left_freq, left)) = heap.pop()?;
            let Reverse((right_freq, right)) = heap.pop()?;
            let freq = left_freq + right_freq;
            trace!("Huffman merge {} + {} -> {}", left, right, nodes.len());

            nodes.push(Node::Internal { left, right, freq });
            heap.push(Reverse((freq, nodes.len() - 1)));
        }

        let Reverse((_, root)) = heap.pop()?;
        Some((nodes, root))
    }

    /// Build the code table.
    pub fn build_table(&self) -> CodeTable {
        let Some((nodes, root)) = self.build_tree() else {
            return CodeTable::new();
        };

        let mut codes = BTreeMap::new();

        if let Node::Leaf { symbol, .. } = nodes[root] {
            codes.insert(symbol, SINGLE_SYMBOL_CODE.to_string());
            return CodeTable { codes };
        }

        let mut stack = vec![(root, String::new())];
        while let Some((index, prefix)) = stack.pop() {
            match nodes[index] {
                Node::Leaf { symbol, .. } => {
                    codes.insert(symbol, prefix);
                }
                Node::Internal { left, right, .. } => {
                    stack.push((right, format!("{prefix}1")));
                    stack.push((left, format!("{prefix}0")));
                }
            }
        }

        CodeTable { codes }
    }
}

/// Bitstring together with the table that decodes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedText {
    /// Concatenated codes, one `'0'`/`'1'` character per bit.
    pub bits: String,
    /// Table the bits were produced with.
    pub table: CodeTable,
}

impl EncodedText {
    /// Split into `(bits, table)`.
    pub fn into_parts(self) -> (String, CodeTable) {
        (self.bits, self.table)
    }
}

/// Huffman as a [`TextCodec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCodec;

impl TextCodec for HuffmanCodec {
    type Encoded = EncodedText;

    fn name(&self) -> &'static str {
        "huffman"
    }

    fn encode(&self, message: &str) -> Result<EncodedText> {
        let (bits, table) = encode(message);
        Ok(EncodedText { bits, table })
    }

    fn decode(&self, encoded: &EncodedText) -> Result<String> {
        decode(&encoded.bits, &encoded.table)
    }
}

/// Count symbol occurrences in a message.
pub fn frequencies(message: &str) -> BTreeMap<char, u64> {
    let mut builder = HuffmanBuilder::new();
    builder.add_text(message);
    builder.frequencies
}

/// Build the code table for a message.
pub fn get_dictionary(message: &str) -> CodeTable {
    let mut builder = HuffmanBuilder::new();
    builder.add_text(message);
    builder.build_table()
}

/// Encode a message, returning the bitstring and the table needed to decode
/// it.
pub fn encode(message: &str) -> (String, CodeTable) {
    let table = get_dictionary(message);
    let bits: String = message
        .chars()
        .filter_map(|symbol| table.get(symbol))
        .collect();

    debug!(
        "Huffman: {} symbols, {} codes -> {} bits",
        message.chars().count(),
        table.len(),
        bits.len()
    );

    (bits, table)
}

/// Decode a bitstring with the table it was produced with.
///
/// Prefixes of increasing length are tried at each position, up to the
/// longest code in the table. A position where no prefix matches (including
/// a truncated tail) or a character other than `'0'`/`'1'` yields
/// [`OxiTextError::MalformedStream`].
pub fn decode(bits: &str, table: &CodeTable) -> Result<String> {
    if let Some(bad) = bits.bytes().position(|b| b != b'0' && b != b'1') {
        return Err(OxiTextError::malformed_stream(bad));
    }

    let reverse: HashMap<&str, char> = table.iter().map(|(symbol, code)| (code, symbol)).collect();
    let max_len = table.max_code_length();

    let mut message = String::new();
    let mut pos = 0;

    while pos < bits.len() {
        let limit = max_len.min(bits.len() - pos);
        let found = (1..=limit).find_map(|len| {
            reverse
                .get(&bits[pos..pos + len])
                .map(|&symbol| (symbol, len))
        });

        match found {
            Some((symbol, len)) => {
                message.push(symbol);
                pos += len;
            }
            None => return Err(OxiTextError::malformed_stream(pos)),
        }
    }

    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_dictionary() {
        let table = get_dictionary("abacabacacabaca");
        assert_eq!(table.len(), 3);
        assert_eq!(table.get('a'), Some("1"));
        assert_eq!(table.get('b'), Some("00"));
        assert_eq!(table.get('c'), Some("01"));
    }

    #[test]
    fn test_reference_bits() {
        let (bits, table) = encode("abacabacacabaca");
        assert_eq!(bits, "1001011001011011001011");
        assert_eq!(decode(&bits, &table).unwrap(), "abacabacacabaca");
    }

    #[test]
    fn test_frequency_proportional_lengths() {
        let mut builder = HuffmanBuilder::new();
        builder.add_count('a', 100);
        builder.add_count('b', 50);
        builder.add_count('c', 25);
        builder.add_count('d', 25);
        let table = builder.build_table();

        let len = |c| table.get(c).map(str::len).unwrap();
        assert!(len('a') <= len('b'));
        assert!(len('b') <= len('c'));
        assert_eq!(len('c'), len('d'));
        assert!(table.is_prefix_free());
    }

    #[test]
    fn test_single_symbol() {
        let (bits, table) = encode("zzzz");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get('z'), Some(SINGLE_SYMBOL_CODE));
        assert_eq!(bits, "0000");
        assert_eq!(decode(&bits, &table).unwrap(), "zzzz");
    }

    #[test]
    fn test_two_symbols() {
        let table = get_dictionary("abab");
        assert_eq!(table.get('a'), Some("0"));
        assert_eq!(table.get('b'), Some("1"));
    }

    #[test]
    fn test_empty_message() {
        let (bits, table) = encode("");
        assert!(bits.is_empty());
        assert!(table.is_empty());
        assert_eq!(decode("", &table).unwrap(), "");
    }

    #[test]
    fn test_ties_are_reproducible() {
        let first = get_dictionary("the quick brown fox jumps over the lazy dog");
        let second = get_dictionary("the quick brown fox jumps over the lazy dog");
        assert_eq!(first, second);
        assert!(first.is_prefix_free());
    }

    #[test]
    fn test_decode_truncated_stream() {
        let (bits, table) = encode("abacabacacabaca");
        // The tail becomes a lone '0', half of a two-bit code.
        let truncated = &bits[..bits.len() - 2];
        let err = decode(truncated, &table).unwrap_err();
        assert!(matches!(err, OxiTextError::MalformedStream { .. }));
    }

    #[test]
    fn test_decode_rejects_non_bits() {
        let table = get_dictionary("ab");
        let err = decode("01x1", &table).unwrap_err();
        assert!(matches!(
            err,
            OxiTextError::MalformedStream { bit_position: 2 }
        ));
    }

    #[test]
    fn test_decode_unknown_prefix() {
        let table = CodeTable::from_entries([('a', "0".to_string()), ('b', "10".to_string())])
            .unwrap();
        let err = decode("011", &table).unwrap_err();
        assert!(matches!(
            err,
            OxiTextError::MalformedStream { bit_position: 1 }
        ));
    }

    #[test]
    fn test_from_entries_validation() {
        assert!(CodeTable::from_entries([('a', String::new())]).is_err());
        assert!(CodeTable::from_entries([('a', "2".to_string())]).is_err());
        assert!(
            CodeTable::from_entries([('a', "0".to_string()), ('b', "0".to_string())]).is_err()
        );
        assert!(
            CodeTable::from_entries([('a', "0".to_string()), ('b', "01".to_string())]).is_err()
        );
        assert!(
            CodeTable::from_entries([('a', "0".to_string()), ('a', "1".to_string())]).is_err()
        );
    }

    #[test]
    fn test_table_encode_missing_symbol() {
        let table = get_dictionary("ab");
        assert_eq!(table.encode("ba").unwrap(), "10");
        assert!(table.encode("abc").is_err());
    }
}
