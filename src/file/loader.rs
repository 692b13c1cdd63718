//! Text file loading.
//!
//! This module reads the document the editor starts with, from a file or
//! from piped stdin. Gzip-compressed input is decompressed transparently and
//! Windows line endings are normalized to `\n`, so the buffer only ever sees
//! one line separator.

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;

/// Gzip magic bytes.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Loads a text file from the filesystem.
///
/// Files ending in `.gz` are decompressed first.
///
/// # Examples
///
/// ```no_run
/// use vincent::file::loader::load_text_file;
///
/// let text = load_text_file("notes.txt").unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist or cannot be read
/// - The contents are not valid UTF-8
/// - A `.gz` file is not valid gzip
pub fn load_text_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        let file = fs::File::open(path_ref)
            .with_context(|| format!("Failed to open {}", path_ref.display()))?;
        decompress(file).context("Failed to decompress gzipped file - file may be corrupted")?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read {}", path_ref.display()))?
    };

    tracing::info!(path = %path_ref.display(), chars = content.chars().count(), "loaded file");
    Ok(normalize_line_endings(content))
}

/// Reads all of stdin as the document text.
///
/// Used when text is piped in; the keyboard is then read from `/dev/tty`.
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid UTF-8
/// (after gzip decompression, when the input starts with the gzip magic).
pub fn load_text_from_stdin() -> Result<String> {
    let mut buffer = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;
    decode_bytes(buffer)
}

/// Turns raw bytes into document text.
///
/// ```
/// use vincent::file::loader::decode_bytes;
///
/// let text = decode_bytes(b"one\r\ntwo\r\n".to_vec()).unwrap();
/// assert_eq!(text, "one\ntwo\n");
/// ```
pub fn decode_bytes(bytes: Vec<u8>) -> Result<String> {
    let content = if bytes.starts_with(&GZIP_MAGIC) {
        decompress(bytes.as_slice()).context("Failed to decompress gzipped stdin")?
    } else {
        String::from_utf8(bytes).context("Invalid UTF-8 in input")?
    };
    Ok(normalize_line_endings(content))
}

fn decompress<R: Read>(reader: R) -> std::io::Result<String> {
    let mut decoder = GzDecoder::new(reader);
    let mut content = String::new();
    decoder.read_to_string(&mut content)?;
    Ok(content)
}

/// Replaces every `\r\n` with `\n`. Lone `\r` is kept as text.
pub fn normalize_line_endings(content: String) -> String {
    if content.contains("\r\n") {
        content.replace("\r\n", "\n")
    } else {
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lone_carriage_return_is_kept() {
        assert_eq!(normalize_line_endings("a\rb\r\n".to_string()), "a\rb\n");
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        assert!(decode_bytes(vec![0xff, 0xfe, 0x00]).is_err());
    }
}
