//! File-acceptance policy applied before the pipeline runs.
//!
//! A pre-filter, not part of the data-integrity core: it rejects payloads
//! by size, extension, and (when supplied) MIME type. Violations are file
//! errors, never validation errors.

use std::path::Path;

use retrodex_model::{IngestError, Result};

/// Maximum accepted payload size: 5 MiB.
pub const MAX_PAYLOAD_BYTES: u64 = 5 * 1024 * 1024;

pub const ALLOWED_EXTENSIONS: &[&str] = &["xlsx", "csv", "xls"];

pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "text/csv",
    "application/csv",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
];

/// Lowercased extension of a path, when it has one.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
}

pub fn check_extension(path: &Path) -> Result<()> {
    match extension_of(path) {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(IngestError::File(format!(
            "unsupported file type '{}': expected one of {}",
            path.display(),
            ALLOWED_EXTENSIONS.join(", ")
        ))),
    }
}

pub fn check_size(len: u64) -> Result<()> {
    if len > MAX_PAYLOAD_BYTES {
        return Err(IngestError::File(format!(
            "file is too large ({len} bytes); the limit is {MAX_PAYLOAD_BYTES} bytes"
        )));
    }
    Ok(())
}

/// Optional MIME cross-check against the fixed allow-list.
pub fn check_mime(mime: &str) -> Result<()> {
    if ALLOWED_MIME_TYPES.contains(&mime) {
        Ok(())
    } else {
        Err(IngestError::File(format!(
            "unsupported content type '{mime}'"
        )))
    }
}

/// Full acceptance check for a file on disk: extension plus on-disk size.
pub fn check_file(path: &Path) -> Result<()> {
    check_extension(path)?;
    let metadata = std::fs::metadata(path)?;
    check_size(metadata.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn extensions_are_checked_case_insensitively() {
        assert!(check_extension(&PathBuf::from("games.CSV")).is_ok());
        assert!(check_extension(&PathBuf::from("games.xlsx")).is_ok());
        assert!(check_extension(&PathBuf::from("games.pdf")).is_err());
        assert!(check_extension(&PathBuf::from("games")).is_err());
    }

    #[test]
    fn oversized_payloads_are_rejected() {
        assert!(check_size(MAX_PAYLOAD_BYTES).is_ok());
        assert!(check_size(MAX_PAYLOAD_BYTES + 1).is_err());
    }

    #[test]
    fn mime_allow_list_is_exact() {
        assert!(check_mime("text/csv").is_ok());
        assert!(check_mime("text/html").is_err());
    }
}
