//! Text file loading.
//!
//! A file is read as a sequence of lines. `\n` and `\r\n` terminators are both
//! accepted and stripped; a trailing terminator does not produce an extra empty
//! line. Files ending in `.gz` are decompressed transparently.
//!
//! Content that is not valid UTF-8 is read as Latin-1, one character per
//! byte, so legacy single-byte files still open.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Loads a text file as an ordered list of lines.
///
/// # Examples
///
/// ```no_run
/// use textquill::file::loader::load_text_file;
///
/// let lines = load_text_file("notes.txt").unwrap();
/// println!("{} lines", lines.len());
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file does not exist or cannot be read
/// - A `.gz` file is not valid gzip
pub fn load_text_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();

    let bytes = if is_gzipped(path) {
        read_gzipped_file(path)?
    } else {
        fs::read(path).with_context(|| format!("Failed to read file {}", path.display()))?
    };
    let content = decode_text(bytes);

    tracing::debug!(path = %path.display(), bytes = content.len(), "loaded file");
    Ok(split_lines(&content))
}

/// Splits file content into lines without their terminators.
pub fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}

/// Decodes file bytes as UTF-8, falling back to Latin-1.
pub fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("file is not valid UTF-8, reading it as Latin-1");
            e.into_bytes().into_iter().map(char::from).collect()
        }
    }
}

/// True if the path names a gzip-compressed file.
pub(crate) fn is_gzipped(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == "gz")
}

/// Reads and decompresses a gzipped file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file is not valid gzip format (corrupted)
fn read_gzipped_file(path: &Path) -> Result<Vec<u8>> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = Vec::new();
    decoder
        .read_to_end(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_decode_text() {
        assert_eq!(decode_text("naïve".as_bytes().to_vec()), "naïve");
        // 0xE9 is é in Latin-1 and invalid on its own in UTF-8
        assert_eq!(decode_text(vec![b'c', b'a', b'f', 0xE9]), "café");
    }

    #[test]
    fn test_is_gzipped() {
        assert!(is_gzipped(Path::new("notes.txt.gz")));
        assert!(!is_gzipped(Path::new("notes.txt")));
        assert!(!is_gzipped(Path::new("gz")));
    }
}
