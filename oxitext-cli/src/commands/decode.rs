//! Decode command implementation.

use crate::document::{decode_file, default_decoded_path};
use std::path::PathBuf;

pub fn cmd_decode(
    input: &PathBuf,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.unwrap_or_else(|| default_decoded_path(input));
    let text = decode_file(input, &output)?;

    println!("Decoded: {}", output.display());
    println!("  Symbols: {}", text.chars().count());

    Ok(())
}
