//! Encode command implementation.

use crate::document::{default_encoded_path, encode_file};
use crate::utils::{resolve_encoding, space_savings};
use std::path::PathBuf;

pub fn cmd_encode(
    input: &PathBuf,
    output: Option<PathBuf>,
    window_size: usize,
    encoding: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let encoding = resolve_encoding(encoding)?;
    let output = output.unwrap_or_else(|| default_encoded_path(input));

    let doc = encode_file(input, &output, window_size, encoding)?;
    let input_bytes = std::fs::metadata(input)?.len() as usize;

    println!("Encoded: {}", output.display());
    println!("  Window size: {}", doc.window_size);
    println!("  Code table: {} symbols", doc.table.len());
    println!("  Bits: {}", doc.bits.len());
    println!(
        "  Savings vs 8-bit input: {:.1}%",
        space_savings(input_bytes, doc.bits.len())
    );

    Ok(())
}
