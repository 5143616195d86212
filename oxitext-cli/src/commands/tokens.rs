//! Tokens command implementation.

use oxitext_deflate::Lz77Encoder;

pub fn cmd_tokens(text: &str, window_size: usize) -> Result<(), Box<dyn std::error::Error>> {
    let tokens = Lz77Encoder::with_window_size(window_size).compress(text)?;

    for (index, token) in tokens.iter().enumerate() {
        println!("{:>6}  {}", index, token);
    }

    let literals = tokens.iter().filter(|t| t.is_literal()).count();
    println!();
    println!(
        "{} symbols -> {} tokens ({} literal-only), window {}",
        text.chars().count(),
        tokens.len(),
        literals,
        window_size
    );

    Ok(())
}
