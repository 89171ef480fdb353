use thiserror::Error;

/// Terminal failure kinds for an ingestion call.
///
/// There is no retry and no partial recovery: a failed call yields no
/// records at all. Row-level coercion failures escalate into
/// [`IngestError::Validation`] with the offending row named.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Malformed or unreadable input, or a file-acceptance policy violation.
    #[error("file error: {0}")]
    File(String),
    /// Structural problems or a failed validation verdict.
    #[error("validation error: {0}")]
    Validation(String),
}

impl From<std::io::Error> for IngestError {
    fn from(err: std::io::Error) -> Self {
        IngestError::File(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
