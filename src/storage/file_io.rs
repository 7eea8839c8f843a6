//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure. Reads
//! never invent data: a missing file is reported as `None` and the caller
//! decides what to substitute.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use crate::error::EnvelopeError;

/// Read a file's bytes, returning `None` if it doesn't exist
pub fn read_optional<P: AsRef<Path>>(path: P) -> Result<Option<Vec<u8>>, EnvelopeError> {
    let path = path.as_ref();

    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(EnvelopeError::Storage(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Read a file's bytes, returning an error if it doesn't exist
pub fn read_required<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, EnvelopeError> {
    let path = path.as_ref();

    read_optional(path)?.ok_or_else(|| {
        EnvelopeError::Storage(format!("File not found: {}", path.display()))
    })
}

/// Write bytes to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_atomic<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<(), EnvelopeError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            EnvelopeError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let file = File::create(&temp_path)
        .map_err(|e| EnvelopeError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(data)
        .map_err(|e| EnvelopeError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| EnvelopeError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| EnvelopeError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        EnvelopeError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        assert!(read_optional(&path).unwrap().is_none());
        assert!(read_required(&path).is_err());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_atomic(&path, b"[1, 2, 3]").unwrap();
        assert_eq!(read_required(&path).unwrap(), b"[1, 2, 3]");
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");
        let temp_path = temp_dir.path().join("test.json.tmp");

        write_atomic(&path, b"{}").unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.json");

        write_atomic(&path, b"{}").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_reading_a_directory_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_optional(temp_dir.path());
        assert!(matches!(result, Err(EnvelopeError::Storage(_))));
    }
}
