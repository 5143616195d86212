//! # OxiText Deflate
//!
//! LZ77 match finding, Huffman coding and their composition over text.
//!
//! ## Pipeline
//!
//! ```text
//! text ─▶ lz77::compress ─▶ tokens ─▶ flatten ─▶ huffman::encode ─▶ bits + table
//! text ◀─ lz77::decompress ◀─ tokens ◀─ regroup ◀─ huffman::decode ◀─ bits + table
//! ```
//!
//! The crate works on `char` sequences, keeps the whole input in memory and
//! uses a greedy match search. It is a teaching-scale pipeline, not a
//! binary-safe or RFC 1951 compatible compressor.
//!
//! ## Example
//!
//! ```rust
//! use oxitext_deflate::{deflate_decode, deflate_encode};
//!
//! let (bits, table) = deflate_encode("Hello", 5).unwrap();
//! assert!(bits.bytes().all(|b| b == b'0' || b == b'1'));
//!
//! let decoded = deflate_decode(&bits, &table, 5).unwrap();
//! assert_eq!(decoded, "Hello");
//! ```
//!
//! ## Stages on their own
//!
//! ```rust
//! use oxitext_deflate::{huffman, lz77, Lz77Token};
//!
//! let tokens = lz77::compress("abacabacabadaca", 5).unwrap();
//! assert_eq!(tokens[3], Lz77Token::new(4, 7, Some('d')));
//!
//! let (bits, table) = huffman::encode("abacabacacabaca");
//! assert_eq!(table.get('a'), Some("1"));
//! assert_eq!(huffman::decode(&bits, &table).unwrap(), "abacabacacabaca");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod deflate;
pub mod huffman;
pub mod lz77;

// Re-exports
pub use deflate::{Deflater, deflate_decode, deflate_encode, flatten_tokens, unflatten_tokens};
pub use huffman::{CodeTable, EncodedText, HuffmanBuilder, HuffmanCodec};
pub use lz77::{DEFAULT_WINDOW_SIZE, Lz77Codec, Lz77Config, Lz77Decoder, Lz77Encoder, Lz77Token};
