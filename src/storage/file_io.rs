//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt the ledger on failure.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use crate::error::MarbleError;

/// Read a file's bytes, returning `None` if the file does not exist
pub fn read_optional<P: AsRef<Path>>(path: P) -> Result<Option<Vec<u8>>, MarbleError> {
    let path = path.as_ref();

    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(MarbleError::StoreRead(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Write bytes to a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified
/// at all, so a reader never observes a partially written log.
pub fn write_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<(), MarbleError> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            MarbleError::StoreWrite(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory (important for atomic rename)
    let temp_path = path.with_extension("tmp");

    let file = File::create(&temp_path)
        .map_err(|e| MarbleError::StoreWrite(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(bytes)
        .map_err(|e| MarbleError::StoreWrite(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| MarbleError::StoreWrite(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| MarbleError::StoreWrite(format!("Failed to sync data: {}", e)))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        MarbleError::StoreWrite(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
