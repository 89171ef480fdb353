//! Ingestion orchestrator.
//!
//! Composes tokenizer, header resolver, coercer, and validator into one
//! call that either returns the full canonical record set or fails with a
//! descriptive error. There is no partial result: a failed call yields no
//! records at all.

use std::path::Path;

use tracing::{debug, info, warn};

use retrodex_model::{GameRecord, IngestError, RecordDefaults, Result};

use crate::coerce::{coerce_row, is_blank_row};
use crate::excel::read_workbook;
use crate::headers::resolve_headers;
use crate::policy;
use crate::tokenizer::{RawTable, tokenize};
use crate::validate::validate_records;

/// Per-call ingestion options. The sentinel defaults are the only knob.
#[derive(Debug, Clone, Default)]
pub struct IngestOptions {
    pub defaults: RecordDefaults,
}

/// A successful ingestion: the canonical record set plus validation counts
/// for downstream logging. Warnings are carried along but never block.
#[derive(Debug, Clone)]
pub struct Ingestion {
    pub records: Vec<GameRecord>,
    pub error_count: usize,
    pub warning_count: usize,
    pub warnings: Vec<String>,
}

/// Ingest raw pasted text (comma-delimited, line-break separated rows).
pub fn ingest_text(text: &str, options: &IngestOptions) -> Result<Ingestion> {
    ingest_table(tokenize(text), options)
}

/// Ingest binary spreadsheet content (first sheet).
pub fn ingest_workbook(bytes: &[u8], options: &IngestOptions) -> Result<Ingestion> {
    ingest_table(read_workbook(bytes)?, options)
}

/// Ingest a file from disk, applying the acceptance policy first.
///
/// The file is read fully in one blocking read before any tokenization
/// starts; a read failure short-circuits the call.
pub fn ingest_path(path: &Path, options: &IngestOptions) -> Result<Ingestion> {
    policy::check_file(path)?;
    let bytes = std::fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "read input file");
    match policy::extension_of(path).as_deref() {
        Some("csv") => {
            let text = String::from_utf8(bytes)
                .map_err(|_| IngestError::File("csv file is not valid UTF-8".to_string()))?;
            ingest_text(&text, options)
        }
        _ => ingest_workbook(&bytes, options),
    }
}

/// Core orchestration over an already-tokenized table.
pub fn ingest_table(table: RawTable, options: &IngestOptions) -> Result<Ingestion> {
    if table.rows.len() < 2 {
        return Err(IngestError::Validation(
            "the table needs at least one header row and one data row".to_string(),
        ));
    }

    let headers = resolve_headers(&table.rows[0])?;

    let mut records = Vec::new();
    for (idx, row) in table.rows.iter().enumerate().skip(1) {
        if is_blank_row(row) {
            continue;
        }
        // Display row: the header is row 1.
        let display_row = idx + 1;
        let record = coerce_row(&headers, row, &options.defaults).map_err(|err| {
            let detail = match err {
                IngestError::File(msg) | IngestError::Validation(msg) => msg,
            };
            IngestError::Validation(format!("Row {display_row}: {detail}"))
        })?;
        records.push(record);
    }

    let report = validate_records(&records);
    for warning in &report.warnings {
        warn!("{warning}");
    }
    if !report.is_valid() {
        return Err(IngestError::Validation(report.errors.join("; ")));
    }

    info!(
        records = records.len(),
        warnings = report.warning_count(),
        "ingestion complete"
    );
    Ok(Ingestion {
        records,
        error_count: report.error_count(),
        warning_count: report.warning_count(),
        warnings: report.warnings,
    })
}
