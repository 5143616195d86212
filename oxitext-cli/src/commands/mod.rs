//! Command implementations for OxiText CLI.

pub mod codes;
pub mod completions;
pub mod decode;
pub mod encode;
pub mod lzw;
pub mod tokens;

pub use codes::cmd_codes;
pub use completions::cmd_completions;
pub use decode::cmd_decode;
pub use encode::cmd_encode;
pub use lzw::cmd_lzw;
pub use test::cmd_test;
pub use tokens::cmd_tokens;
