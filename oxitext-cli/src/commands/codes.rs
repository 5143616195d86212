//! Codes command implementation.

use crate::utils::space_savings;
use oxitext_deflate::huffman;

pub fn cmd_codes(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let frequencies = huffman::frequencies(text);
    let (bits, table) = huffman::encode(text);

    let mut rows: Vec<_> = table.iter().collect();
    rows.sort_by(|a, b| a.1.len().cmp(&b.1.len()).then(a.0.cmp(&b.0)));

    println!("{:>8} {:>8}  Code", "Symbol", "Count");
    println!("{}", "-".repeat(40));
    for (symbol, code) in rows {
        let count = frequencies.get(&symbol).copied().unwrap_or(0);
        println!("{:>8} {:>8}  {}", format!("{:?}", symbol), count, code);
    }
    println!("{}", "-".repeat(40));

    let symbols = text.chars().count();
    println!(
        "{} symbols -> {} bits, longest code {}, {:.1}% saved vs 8-bit",
        symbols,
        bits.len(),
        table.max_code_length(),
        space_savings(symbols, bits.len())
    );

    Ok(())
}
