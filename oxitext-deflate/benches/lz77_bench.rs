//! Benchmarks for LZ77 match finding.

use oxitext_deflate::lz77::{Lz77Encoder, Lz77Token};

fn main() {
    // Test data: Various sizes and patterns
    let test_cases = vec![
        ("small_random", generate_random(1024)),
        ("medium_random", generate_random(16 * 1024)),
        ("small_repeated", generate_repeated(1024)),
        ("medium_repeated", generate_repeated(16 * 1024)),
        ("small_text", generate_text_like(1024)),
        ("medium_text", generate_text_like(16 * 1024)),
    ];

    println!("LZ77 Match Finder Benchmarks");
    println!("============================\n");

    for (name, data) in &test_cases {
        println!("Test: {} ({} symbols)", name, data.chars().count());

        for window in [1, 5, 9, 32] {
            let start = std::time::Instant::now();
            let tokens = Lz77Encoder::with_window_size(window)
                .compress(data)
                .expect("window size is positive");
            let elapsed = start.elapsed();

            let expanded: usize = tokens.iter().map(Lz77Token::expanded_len).sum();
            let throughput = data.len() as f64 / elapsed.as_secs_f64() / 1024.0 / 1024.0;
            let ratio = data.chars().count() as f64 / tokens.len().max(1) as f64;

            println!(
                "  Window {:2}: {:6.2} MB/s, {:5} tokens, {:.2} symbols/token, {:7} µs",
                window,
                throughput,
                tokens.len(),
                ratio,
                elapsed.as_micros()
            );

            // Sanity check
            assert_eq!(expanded, data.chars().count());
        }
        println!();
    }
}

fn generate_random(size: usize) -> String {
    // Simple LCG random number generator over lowercase letters
    let mut seed = 12345u32;
    (0..size)
        .map(|_| {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            (b'a' + ((seed >> 16) % 26) as u8) as char
        })
        .collect()
}

fn generate_repeated(size: usize) -> String {
    // Highly compressible repeated pattern
    "ABCDEFGH".chars().cycle().take(size).collect()
}

fn generate_text_like(size: usize) -> String {
    // Simulates English text with word-like patterns
    let words = [
        "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "and", "runs", "through",
        "forest", "near", "river", "under", "blue", "sky", "with", "wind", "blowing",
    ];
    let mut data = String::with_capacity(size);
    let mut seed = 42u32;

    while data.len() < size {
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        data.push_str(words[(seed >> 16) as usize % words.len()]);
        data.push(' ');
    }
    data.truncate(size);
    data
}
