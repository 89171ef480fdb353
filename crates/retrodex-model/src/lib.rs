//! Canonical data model for retro game collections.
//!
//! Every header synonym in user input resolves to one [`CanonicalField`];
//! every data row coerces into one [`GameRecord`]. Validation over a record
//! set produces a [`ValidationReport`] with separated errors and warnings.

pub mod error;
pub mod field;
pub mod record;
pub mod report;

pub use error::{IngestError, Result};
pub use field::CanonicalField;
pub use record::{GameRecord, RecordDefaults};
pub use report::ValidationReport;
