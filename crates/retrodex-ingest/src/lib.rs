//! Collection-data ingestion and normalization pipeline.
//!
//! Takes heterogeneous user-supplied tabular input (arbitrary column
//! naming, mixed locales, missing optional columns) and deterministically
//! produces a validated, canonical [`retrodex_model::GameRecord`] set.
//!
//! Data flows one direction: raw bytes/text -> rows of strings ->
//! canonical records -> validated record set. No stage depends on a later
//! one, and nothing is shared between calls except the immutable synonym
//! table and the sentinel defaults.

pub mod coerce;
pub mod excel;
pub mod headers;
pub mod pipeline;
pub mod policy;
pub mod tokenizer;
pub mod validate;

pub use coerce::{coerce_row, parse_decimal, parse_leading_int};
pub use excel::read_workbook;
pub use headers::{HeaderMap, resolve_headers, synonyms_for};
pub use pipeline::{
    IngestOptions, Ingestion, ingest_path, ingest_table, ingest_text, ingest_workbook,
};
pub use policy::{ALLOWED_EXTENSIONS, ALLOWED_MIME_TYPES, MAX_PAYLOAD_BYTES};
pub use tokenizer::{RawTable, tokenize};
pub use validate::{validate_records, validate_records_at};
