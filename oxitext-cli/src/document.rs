//! Encoded documents on disk.
//!
//! A document is pretty-printed JSON holding everything `decode` needs:
//!
//! ```text
//! {
//!   "format": "oxitext-deflate",
//!   "version": 1,
//!   "window_size": 5,
//!   "bits": "0110...",
//!   "table": [{ "symbol": "a", "code": "10" }, ...]
//! }
//! ```

use crate::utils::{is_utf8, read_text};
use encoding_rs::Encoding;
use log::info;
use oxitext_core::{OxiTextError, Result};
use oxitext_deflate::{CodeTable, deflate_decode, deflate_encode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Format tag written into every document.
pub const FORMAT_NAME: &str = "oxitext-deflate";

/// Current document version.
pub const FORMAT_VERSION: u32 = 1;

/// One code table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    /// Coded symbol.
    pub symbol: char,
    /// Its bit code as `'0'`/`'1'` characters.
    pub code: String,
}

/// Persisted output of the LZ77 + Huffman pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedDocument {
    /// Format tag, always [`FORMAT_NAME`].
    pub format: String,
    /// Document version, currently [`FORMAT_VERSION`].
    pub version: u32,
    /// LZ77 window size the bits were produced with.
    pub window_size: usize,
    /// Huffman-coded flattened token stream.
    pub bits: String,
    /// Code table needed to decode `bits`.
    pub table: Vec<TableEntry>,
}

impl EncodedDocument {
    /// Build a document from pipeline output.
    pub fn new(window_size: usize, bits: String, table: &CodeTable) -> Self {
        Self {
            format: FORMAT_NAME.to_string(),
            version: FORMAT_VERSION,
            window_size,
            bits,
            table: table
                .iter()
                .map(|(symbol, code)| TableEntry {
                    symbol,
                    code: code.to_string(),
                })
                .collect(),
        }
    }

    /// Parse and validate a document.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: Self =
            serde_json::from_str(json).map_err(|e| OxiTextError::document(e.to_string()))?;

        if doc.format != FORMAT_NAME {
            return Err(OxiTextError::document(format!(
                "unsupported format '{}'",
                doc.format
            )));
        }
        if doc.version != FORMAT_VERSION {
            return Err(OxiTextError::document(format!(
                "unsupported version {}",
                doc.version
            )));
        }

        Ok(doc)
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| OxiTextError::document(e.to_string()))
    }

    /// Rebuild the code table.
    pub fn code_table(&self) -> Result<CodeTable> {
        CodeTable::from_entries(
            self.table
                .iter()
                .map(|entry| (entry.symbol, entry.code.clone())),
        )
    }

    /// Decode the stored bits back to text.
    pub fn decode(&self) -> Result<String> {
        deflate_decode(&self.bits, &self.code_table()?, self.window_size)
    }
}

/// `<stem>_encoded.json` next to `input`.
pub fn default_encoded_path(input: &Path) -> PathBuf {
    let stem = file_stem(input);
    input.with_file_name(format!("{}_encoded.json", stem))
}

/// `<stem>_decoded.txt` next to `input`, dropping an `_encoded` suffix.
pub fn default_decoded_path(input: &Path) -> PathBuf {
    let stem = file_stem(input);
    let stem = stem.strip_suffix("_encoded").unwrap_or(&stem);
    input.with_file_name(format!("{}_decoded.txt", stem))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string())
}

/// Encode the text file `input` into a document at `output`.
pub fn encode_file(
    input: &Path,
    output: &Path,
    window_size: usize,
    encoding: &'static Encoding,
) -> Result<EncodedDocument> {
    if !is_utf8(encoding) {
        info!("Reading {} as {}", input.display(), encoding.name());
    }
    let text = read_text(input, encoding)?;

    let (bits, table) = deflate_encode(&text, window_size)?;
    let doc = EncodedDocument::new(window_size, bits, &table);
    fs::write(output, doc.to_json()?)?;

    info!(
        "Encoded {} ({} symbols) into {} ({} bits)",
        input.display(),
        text.chars().count(),
        output.display(),
        doc.bits.len()
    );
    Ok(doc)
}

/// Decode the document `input` and write UTF-8 text to `output`.
pub fn decode_file(input: &Path, output: &Path) -> Result<String> {
    if input.is_dir() {
        return Err(OxiTextError::invalid_argument(format!(
            "{} is a directory",
            input.display()
        )));
    }

    let json = fs::read_to_string(input)?;
    let text = EncodedDocument::from_json(&json)?.decode()?;
    fs::write(output, &text)?;

    info!("Decoded {} into {}", input.display(), output.display());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::UTF_8;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("oxitext_document_test_{}", name))
    }

    #[test]
    fn test_file_roundtrip() {
        let input = temp_path("roundtrip.txt");
        let encoded = temp_path("roundtrip_encoded.json");
        let decoded = temp_path("roundtrip_decoded.txt");
        let message = "abacabacabadaca, to be or not to be";
        fs::write(&input, message).unwrap();

        let doc = encode_file(&input, &encoded, 5, UTF_8).unwrap();
        assert_eq!(doc.format, FORMAT_NAME);
        assert_eq!(doc.window_size, 5);

        let text = decode_file(&encoded, &decoded).unwrap();
        assert_eq!(text, message);
        assert_eq!(fs::read_to_string(&decoded).unwrap(), message);

        for path in [&input, &encoded, &decoded] {
            let _ = fs::remove_file(path);
        }
    }

    #[test]
    fn test_json_shape() {
        let (bits, table) = deflate_encode("Hello", 5).unwrap();
        let doc = EncodedDocument::new(5, bits, &table);
        let json = doc.to_json().unwrap();
        assert!(json.contains("\"format\": \"oxitext-deflate\""));
        assert!(json.contains("\"symbol\": \"H\""));
        assert_eq!(EncodedDocument::from_json(&json).unwrap(), doc);
        assert_eq!(doc.decode().unwrap(), "Hello");
    }

    #[test]
    fn test_wrong_format_rejected() {
        let json = r#"{"format":"zip","version":1,"window_size":5,"bits":"","table":[]}"#;
        let err = EncodedDocument::from_json(json).unwrap_err();
        assert!(matches!(err, OxiTextError::Document { .. }));
    }

    #[test]
    fn test_wrong_version_rejected() {
        let json =
            r#"{"format":"oxitext-deflate","version":9,"window_size":5,"bits":"","table":[]}"#;
        assert!(EncodedDocument::from_json(json).is_err());
    }

    #[test]
    fn test_invalid_table_rejected() {
        let json = r#"{"format":"oxitext-deflate","version":1,"window_size":5,"bits":"0",
            "table":[{"symbol":"a","code":"0"},{"symbol":"b","code":"01"}]}"#;
        let doc = EncodedDocument::from_json(json).unwrap();
        assert!(matches!(
            doc.decode(),
            Err(OxiTextError::InvalidCodeTable { .. })
        ));
    }

    #[test]
    fn test_missing_input() {
        let err = decode_file(&temp_path("missing.json"), &temp_path("missing.txt")).unwrap_err();
        assert!(matches!(err, OxiTextError::Io(_)));
    }

    #[test]
    fn test_default_paths() {
        let input = Path::new("/tmp/notes.txt");
        assert_eq!(
            default_encoded_path(input),
            PathBuf::from("/tmp/notes_encoded.json")
        );
        assert_eq!(
            default_decoded_path(Path::new("/tmp/notes_encoded.json")),
            PathBuf::from("/tmp/notes_decoded.txt")
        );
    }
}
