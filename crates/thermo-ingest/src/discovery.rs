//! File discovery for working folders.

use std::path::{Path, PathBuf};

use thermo_model::{FileRecord, Format};
use tracing::warn;

use crate::error::{IngestError, Result};
use crate::extract::extract_number;

/// Lists all files of `format` directly inside `dir`.
///
/// Subdirectories are skipped. Returns files sorted by filename.
pub fn list_format_files(dir: &Path, format: Format) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }

        if format.matches_path(&path) {
            files.push(path);
        }
    }

    // Sort by filename
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Builds a [`FileRecord`] for a listed path.
///
/// Returns `None` for names that are not valid UTF-8.
pub fn record_for(path: &Path, format: Format) -> Option<FileRecord> {
    let name = path.file_name()?.to_str()?;
    Some(FileRecord {
        original_name: name.to_string(),
        format,
        extracted_number: extract_number(name),
    })
}

/// Lists `dir` and extracts a sequence number for every file of `format`.
///
/// Files whose names are not valid UTF-8 are logged and left out.
pub fn list_records(dir: &Path, format: Format) -> Result<Vec<FileRecord>> {
    let files = list_format_files(dir, format)?;
    let mut records = Vec::with_capacity(files.len());
    for path in files {
        match record_for(&path, format) {
            Some(record) => records.push(record),
            None => warn!(path = %path.display(), "skipping file with non UTF-8 name"),
        }
    }
    Ok(records)
}
