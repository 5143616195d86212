//! Utility functions for the CLI.

use encoding_rs::{Encoding, UTF_8};
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use oxitext_core::{OxiTextError, Result};
use std::fs;
use std::path::Path;

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("progress bar template is valid")
            .progress_chars("█▓▒░ "),
    );
    pb
}

/// Resolve an `encoding_rs` label such as `utf-8`, `shift_jis` or `latin1`.
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| OxiTextError::invalid_argument(format!("unknown encoding '{}'", label)))
}

/// Read a text file, decoding it from `encoding`.
///
/// A byte-order mark overrides `encoding`. Malformed sequences are replaced
/// with U+FFFD and reported as a warning.
pub fn read_text(path: &Path, encoding: &'static Encoding) -> Result<String> {
    if path.is_dir() {
        return Err(OxiTextError::invalid_argument(format!(
            "{} is a directory",
            path.display()
        )));
    }

    let bytes = fs::read(path)?;
    let (text, used, had_errors) = encoding.decode(&bytes);
    if had_errors {
        warn!(
            "{}: malformed {} sequences replaced",
            path.display(),
            used.name()
        );
    }
    Ok(text.into_owned())
}

/// Text from `--text` or from a file, whichever was given.
pub fn read_input(file: Option<&Path>, text: Option<&str>, encoding: &str) -> Result<String> {
    match (file, text) {
        (_, Some(text)) => Ok(text.to_string()),
        (Some(path), None) => read_text(path, resolve_encoding(encoding)?),
        (None, None) => Err(OxiTextError::invalid_argument(
            "either a file or --text is required",
        )),
    }
}

/// Percentage of space saved by `coded_bits` against `symbols` 8-bit symbols.
pub fn space_savings(symbols: usize, coded_bits: usize) -> f64 {
    if symbols == 0 {
        return 0.0;
    }
    (1.0 - coded_bits as f64 / (symbols * 8) as f64) * 100.0
}

/// Whether `encoding` is the default UTF-8.
pub fn is_utf8(encoding: &'static Encoding) -> bool {
    encoding == UTF_8
}
