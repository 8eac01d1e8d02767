//! Text file saving.
//!
//! Each line is written followed by `\n`. Writes are atomic (temp file then
//! rename), can keep a `.bak` copy of the previous file, and are gzip
//! compressed when the target ends in `.gz`.

use super::loader::is_gzipped;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Options that affect how a file is written.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaveOptions {
    /// Copy an existing target to `<name>.bak` before overwriting it
    pub create_backup: bool,
}

/// Saves lines to `path`, each followed by a line terminator.
///
/// # Examples
///
/// ```no_run
/// use textquill::file::saver::{save_text_file, SaveOptions};
///
/// let lines = vec!["first".to_string(), "second".to_string()];
/// save_text_file("notes.txt", &lines, SaveOptions::default()).unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - Backup creation fails (if requested)
/// - Writing to the temp file fails
/// - Renaming the temp file to the target fails
pub fn save_text_file<P, S>(path: P, lines: &[S], options: SaveOptions) -> Result<()>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let path = path.as_ref();

    if options.create_backup && path.exists() {
        create_backup(path)?;
    }

    let mut output = String::new();
    for line in lines {
        output.push_str(line.as_ref());
        output.push('\n');
    }

    write_file_atomic(path, output.as_bytes(), is_gzipped(path))?;
    tracing::debug!(path = %path.display(), lines = lines.len(), "saved file");
    Ok(())
}

/// Creates a backup of a file by copying it with a .bak extension.
fn create_backup(path: &Path) -> Result<()> {
    let backup_path = sibling_with_suffix(path, "bak")?;
    fs::copy(path, backup_path).context("Failed to create backup")?;
    Ok(())
}

/// `dir/name` → `dir/name.<suffix>`
fn sibling_with_suffix(path: &Path, suffix: &str) -> Result<PathBuf> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid file name"))?;
    Ok(path.with_file_name(format!("{}.{}", name, suffix)))
}

/// Writes data to a file atomically, optionally compressing with gzip.
///
/// The target file is never left partially written.
fn write_file_atomic(path: &Path, data: &[u8], compress: bool) -> Result<()> {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let temp_path = sibling_with_suffix(path, "tmp")?;

    if compress {
        let file = fs::File::create(&temp_path).context("Failed to create temp file")?;
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder
            .write_all(data)
            .context("Failed to write compressed data")?;
        encoder.finish().context("Failed to finish compression")?;
    } else {
        fs::write(&temp_path, data).context("Failed to write temp file")?;
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e).context("Failed to rename temp file");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_each_line_is_terminated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        save_text_file(&path, &["a", "", "b"], SaveOptions::default()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\n\nb\n");
        assert!(!dir.path().join("out.txt.tmp").exists());
    }

    #[test]
    fn test_backup_keeps_previous_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "old\n").unwrap();

        let options = SaveOptions {
            create_backup: true,
        };
        save_text_file(&path, &["new"], options).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
        assert_eq!(
            fs::read_to_string(dir.path().join("out.txt.bak")).unwrap(),
            "old\n"
        );
    }

    #[test]
    fn test_unwritable_path_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        assert!(save_text_file(&path, &["x"], SaveOptions::default()).is_err());
    }
}
