//! # OxiText Core
//!
//! Core components shared by the OxiText codecs.
//!
//! - [`window`]: Bounded symbol window with cyclic back-reference reads
//! - [`traits`]: The [`TextCodec`] trait implemented by every coder
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Front end                                           │
//! │     CLI, encoded documents on disk                      │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     LZ77, Huffman, Deflate (LZ77+Huffman), LZW          │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Core (this crate)                                   │
//! │     SymbolWindow, TextCodec, OxiTextError               │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxitext_core::SymbolWindow;
//!
//! let mut window = SymbolWindow::new(5).unwrap();
//! window.extend("abac".chars());
//!
//! // Runs longer than the distance repeat the window.
//! let run: String = window.read_run(4, 7).unwrap().into_iter().collect();
//! assert_eq!(run, "abacaba");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod traits;
pub mod window;

// Re-exports for convenience
pub use error::{OxiTextError, Result};
pub use traits::TextCodec;
pub use window::{SymbolWindow, WindowedOutput};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{OxiTextError, Result};
    pub use crate::traits::TextCodec;
    pub use crate::window::{SymbolWindow, WindowedOutput};
}
