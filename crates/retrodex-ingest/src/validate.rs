//! Semantic validation over a full coerced record set.
//!
//! Pure function of its input: never mutates records and collects every
//! finding instead of stopping at the first. Errors block ingestion;
//! warnings are advisory only.

use chrono::Datelike;

use retrodex_model::{GameRecord, ValidationReport};

/// Earliest plausible release year for a retro collection entry.
pub const MIN_YEAR: i32 = 1970;
/// Record count above which a single informational warning is emitted.
pub const LARGE_COLLECTION: usize = 1000;
/// Purchase price above which a per-record warning is emitted.
pub const HIGH_PURCHASE_PRICE: f64 = 10_000.0;

/// Validate a coerced record set against the current calendar year.
pub fn validate_records(records: &[GameRecord]) -> ValidationReport {
    validate_records_at(records, chrono::Local::now().year())
}

/// Validation with an explicit current year, so the year-range bound is
/// testable without depending on the wall clock.
pub fn validate_records_at(records: &[GameRecord], current_year: i32) -> ValidationReport {
    let mut report = ValidationReport::default();
    if records.is_empty() {
        report.push_error("no games found in the input");
        return report;
    }
    if records.len() > LARGE_COLLECTION {
        report.push_warning(format!(
            "collection has {} entries; that is a lot for one analysis",
            records.len()
        ));
    }

    let max_year = current_year + 2;
    for (idx, record) in records.iter().enumerate() {
        // Display row: +1 for the header row, +1 for human counting.
        let row = idx + 2;
        if record.title.is_empty() {
            report.push_error(format!("Row {row}: title is required"));
        }
        if record.platform.is_empty() {
            report.push_error(format!("Row {row}: platform is required"));
        }
        if record.year != 0 && (record.year < MIN_YEAR || record.year > max_year) {
            report.push_warning(format!(
                "Row {row}: year {} is outside the expected range",
                record.year
            ));
        }
        if record.purchase_price < 0.0 {
            report.push_error(format!("Row {row}: purchase price cannot be negative"));
        }
        if record.purchase_price > HIGH_PURCHASE_PRICE {
            report.push_warning(format!(
                "Row {row}: purchase price {} is unusually high",
                record.purchase_price
            ));
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, platform: &str, year: i32, price: f64) -> GameRecord {
        GameRecord {
            title: title.to_string(),
            platform: platform.to_string(),
            genre: "unspecified".to_string(),
            year,
            purchase_price: price,
            condition: "used".to_string(),
            rarity: "common".to_string(),
            price_loose: None,
            price_cib: None,
            price_new: None,
        }
    }

    #[test]
    fn empty_set_is_a_single_error() {
        let report = validate_records_at(&[], 2026);
        assert!(!report.is_valid());
        assert_eq!(report.errors, vec!["no games found in the input"]);
    }

    #[test]
    fn missing_title_names_the_display_row() {
        let records = vec![
            record("Game A", "SNES", 1994, 10.0),
            record("", "SNES", 1994, 10.0),
        ];
        let report = validate_records_at(&records, 2026);
        assert_eq!(report.errors, vec!["Row 3: title is required"]);
    }

    #[test]
    fn out_of_range_year_is_only_a_warning() {
        let records = vec![record("Game A", "SNES", 1969, 10.0)];
        let report = validate_records_at(&records, 2026);
        assert!(report.is_valid());
        assert_eq!(report.warning_count(), 1);
        assert!(report.warnings[0].contains("1969"));
    }

    #[test]
    fn year_zero_means_unknown_and_is_not_flagged() {
        let records = vec![record("Game A", "SNES", 0, 10.0)];
        let report = validate_records_at(&records, 2026);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn year_bound_tracks_the_current_year() {
        let records = vec![record("Game A", "SNES", 2028, 10.0)];
        assert_eq!(validate_records_at(&records, 2026).warning_count(), 0);
        assert_eq!(validate_records_at(&records, 2025).warning_count(), 1);
    }

    #[test]
    fn negative_price_is_an_error_and_high_price_a_warning() {
        let records = vec![
            record("Game A", "SNES", 1994, -1.0),
            record("Game B", "SNES", 1994, 12_000.0),
        ];
        let report = validate_records_at(&records, 2026);
        assert_eq!(report.errors, vec!["Row 2: purchase price cannot be negative"]);
        assert_eq!(report.warning_count(), 1);
    }

    #[test]
    fn oversized_collection_triggers_exactly_one_warning() {
        let records: Vec<GameRecord> = (0..1001)
            .map(|i| record(&format!("Game {i}"), "SNES", 1994, 10.0))
            .collect();
        let report = validate_records_at(&records, 2026);
        assert!(report.is_valid());
        assert_eq!(report.warning_count(), 1);
    }
}
