//! Coercion of one raw data row into a typed [`GameRecord`].
//!
//! Coercion is lenient by design: unparseable numbers become 0 and absent
//! optional strings take their sentinel default. Emptiness of `title` and
//! `platform` is the validator's concern, not a coercion failure.

use retrodex_model::{CanonicalField, GameRecord, IngestError, RecordDefaults, Result};

use crate::headers::HeaderMap;

/// Coerce one data row into a [`GameRecord`].
///
/// Fails only when the row is entirely composed of empty cells; the
/// orchestrator skips such rows before they get here.
pub fn coerce_row(
    headers: &HeaderMap,
    row: &[String],
    defaults: &RecordDefaults,
) -> Result<GameRecord> {
    if is_blank_row(row) {
        return Err(IngestError::Validation(
            "row has no data in any cell".to_string(),
        ));
    }

    Ok(GameRecord {
        title: cell(headers, row, CanonicalField::Title).trim().to_string(),
        platform: cell(headers, row, CanonicalField::Platform)
            .trim()
            .to_string(),
        genre: text_or_default(cell(headers, row, CanonicalField::Genre), &defaults.genre),
        year: parse_leading_int(cell(headers, row, CanonicalField::Year)),
        purchase_price: parse_decimal(cell(headers, row, CanonicalField::PurchasePrice)),
        condition: text_or_default(
            cell(headers, row, CanonicalField::Condition),
            &defaults.condition,
        ),
        rarity: text_or_default(cell(headers, row, CanonicalField::Rarity), &defaults.rarity),
        price_loose: market_price(cell(headers, row, CanonicalField::PriceLoose)),
        price_cib: market_price(cell(headers, row, CanonicalField::PriceCib)),
        price_new: market_price(cell(headers, row, CanonicalField::PriceNew)),
    })
}

/// The raw cell for a resolved field, or empty when the column is absent
/// or the row is short.
fn cell<'a>(headers: &HeaderMap, row: &'a [String], field: CanonicalField) -> &'a str {
    headers
        .column(field)
        .and_then(|idx| row.get(idx))
        .map(String::as_str)
        .unwrap_or("")
}

pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

fn text_or_default(raw: &str, default: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parse the leading integer of a cell, e.g. `"1994 (PAL)"` -> 1994.
/// Unparseable or absent input yields 0; no range check happens here.
pub fn parse_leading_int(raw: &str) -> i32 {
    let trimmed = raw.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i32>().map(|v| sign * v).unwrap_or(0)
}

/// Parse a decimal number tolerating a locale decimal comma, taking the
/// leading numeric prefix so `"19,99 €"` -> 19.99. Unparseable input
/// yields 0.
pub fn parse_decimal(raw: &str) -> f64 {
    let normalized = raw.trim().replace(',', ".");
    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (idx, ch) in normalized.char_indices() {
        match ch {
            '+' | '-' if idx == 0 => end = 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = idx + 1;
            }
            digit if digit.is_ascii_digit() => {
                seen_digit = true;
                end = idx + 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return 0.0;
    }
    normalized[..end].parse().unwrap_or(0.0)
}

/// Market prices are only kept when the source supplied a positive value;
/// a parse result of 0 or below means the field is omitted entirely.
fn market_price(raw: &str) -> Option<f64> {
    let value = parse_decimal(raw);
    (value > 0.0).then_some(value)
}
