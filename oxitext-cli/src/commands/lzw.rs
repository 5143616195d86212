//! LZW command implementation.

use oxitext_lzw::{compress, initial_dictionary};

pub fn cmd_lzw(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let dictionary = initial_dictionary(text);
    let codes = compress(text)?;

    let symbols: Vec<String> = dictionary.iter().map(|c| format!("{:?}", c)).collect();
    println!("Initial dictionary ({}): [{}]", dictionary.len(), symbols.join(", "));

    let rendered: Vec<String> = codes.iter().map(usize::to_string).collect();
    println!("Codes ({}): [{}]", codes.len(), rendered.join(", "));

    Ok(())
}
