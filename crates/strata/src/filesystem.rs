//! Reading Python source off disk.
//!
//! Python source files declare their own encoding (PEP 263); we handle the
//! common cases without pulling in a full codec library: UTF-8 (optionally
//! with a BOM) and Latin-1. Everything is normalized to `\n` line endings so
//! recorded line contents are stable across platforms.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{StrataError, StrataResult};

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

static CODING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t\f]*#.*?coding[:=][ \t]*([-_.a-zA-Z0-9]+)").unwrap());

/// Read a module's source, decoding according to its declared encoding.
pub fn read_source(path: &Path) -> StrataResult<String> {
    let bytes = fs::read(path).map_err(|source| StrataError::FileRead {
        path: path.display().to_string(),
        source,
    })?;
    let text = decode(&bytes).map_err(|message| StrataError::FileRead {
        path: path.display().to_string(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, message),
    })?;
    Ok(normalize_line_endings(text))
}

fn decode(bytes: &[u8]) -> Result<String, String> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    match declared_encoding(bytes) {
        Some(encoding) if is_latin1(&encoding) => Ok(decode_latin1(bytes)),
        Some(encoding) if !is_utf8(&encoding) => {
            Err(format!("unsupported source encoding {encoding}"))
        }
        _ => String::from_utf8(bytes.to_vec()).map_err(|err| err.to_string()),
    }
}

/// Look for a PEP 263 encoding declaration in the first two lines.
fn declared_encoding(bytes: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(bytes);
    for line in head.lines().take(2) {
        if let Some(captures) = CODING_RE.captures(line) {
            return Some(captures[1].to_ascii_lowercase());
        }
    }
    None
}

fn is_utf8(encoding: &str) -> bool {
    matches!(encoding, "utf-8" | "utf8" | "ascii" | "us-ascii")
}

fn is_latin1(encoding: &str) -> bool {
    matches!(encoding, "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1")
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Normalize line endings to LF for cross-platform consistency.
pub fn normalize_line_endings(content: String) -> String {
    if !content.contains('\r') {
        return content;
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_utf8() {
        assert_eq!(decode(b"import os\n").unwrap(), "import os\n");
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        assert_eq!(decode(b"\xef\xbb\xbfimport os\n").unwrap(), "import os\n");
    }

    #[test]
    fn test_latin1_declaration() {
        let source = b"# -*- coding: latin-1 -*-\nname = '\xe9'\n";
        let decoded = decode(source).unwrap();
        assert!(decoded.contains('\u{e9}'));
    }

    #[test]
    fn test_unsupported_encoding_is_an_error() {
        let source = b"# -*- coding: shift-jis -*-\n";
        assert!(decode(source).is_err());
    }

    #[test]
    fn test_invalid_utf8_without_declaration_is_an_error() {
        assert!(decode(b"name = '\xe9'\n").is_err());
    }

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(
            normalize_line_endings("a\r\nb\rc\n".to_owned()),
            "a\nb\nc\n"
        );
    }
}
