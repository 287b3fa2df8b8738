//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::CoinError;

/// Read a file as an untyped JSON value
///
/// Returns `None` when the file doesn't exist, so callers can fall back to
/// defaults. Documents are read untyped so that damaged entries can be
/// repaired instead of failing the whole load.
pub fn read_json_value<P: AsRef<Path>>(path: P) -> Result<Option<Value>, CoinError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .map_err(|e| CoinError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map(Some)
        .map_err(|e| CoinError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), CoinError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CoinError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target, so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| CoinError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| CoinError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| CoinError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| CoinError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        CoinError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
