//! Core traits for text codecs.
//!
//! Every coder in the workspace (LZ77, Huffman, the composed Deflate pipeline
//! and LZW) implements [`TextCodec`], so front ends can drive any of them
//! through the same interface.

use crate::error::Result;

/// A whole-input text codec.
///
/// Codecs are plain values: they carry configuration only, and every call
/// builds its working state from scratch.
pub trait TextCodec {
    /// The encoded representation produced by this codec.
    type Encoded;

    /// Short human-readable name of the codec.
    fn name(&self) -> &'static str;

    /// Encode a complete message.
    fn encode(&self, message: &str) -> Result<Self::Encoded>;

    /// Decode a representation produced by [`TextCodec::encode`].
    fn decode(&self, encoded: &Self::Encoded) -> Result<String>;

    /// Check that `message` survives an encode/decode round trip.
    fn verify(&self, message: &str) -> Result<bool> {
        let encoded = self.encode(message)?;
        Ok(self.decode(&encoded)? == message)
    }
}
