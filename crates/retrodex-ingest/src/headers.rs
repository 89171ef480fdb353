//! Header resolution against the canonical field set.
//!
//! Collection spreadsheets arrive with whatever column names the owner
//! typed, in Spanish or English, in any casing. A fixed synonym table maps
//! each recognized spelling to one [`CanonicalField`]; the three market
//! price columns are matched by exact case-insensitive name instead.

use std::collections::BTreeMap;

use retrodex_model::{CanonicalField, IngestError, Result};

const SYNONYMS: &[(&str, CanonicalField)] = &[
    ("titulo", CanonicalField::Title),
    ("título", CanonicalField::Title),
    ("title", CanonicalField::Title),
    ("juego", CanonicalField::Title),
    ("game", CanonicalField::Title),
    ("nombre", CanonicalField::Title),
    ("name", CanonicalField::Title),
    ("plataforma", CanonicalField::Platform),
    ("platform", CanonicalField::Platform),
    ("consola", CanonicalField::Platform),
    ("console", CanonicalField::Platform),
    ("sistema", CanonicalField::Platform),
    ("system", CanonicalField::Platform),
    ("genero", CanonicalField::Genre),
    ("género", CanonicalField::Genre),
    ("genre", CanonicalField::Genre),
    ("tipo", CanonicalField::Genre),
    ("categoria", CanonicalField::Genre),
    ("categoría", CanonicalField::Genre),
    ("año", CanonicalField::Year),
    ("ano", CanonicalField::Year),
    ("year", CanonicalField::Year),
    ("fecha", CanonicalField::Year),
    ("lanzamiento", CanonicalField::Year),
    ("precio compra", CanonicalField::PurchasePrice),
    ("precio de compra", CanonicalField::PurchasePrice),
    ("purchase_price", CanonicalField::PurchasePrice),
    ("purchase price", CanonicalField::PurchasePrice),
    ("precio", CanonicalField::PurchasePrice),
    ("price", CanonicalField::PurchasePrice),
    ("coste", CanonicalField::PurchasePrice),
    ("cost", CanonicalField::PurchasePrice),
    ("yourprice", CanonicalField::PurchasePrice),
    ("pagado", CanonicalField::PurchasePrice),
    ("paid", CanonicalField::PurchasePrice),
    ("estado", CanonicalField::Condition),
    ("condicion", CanonicalField::Condition),
    ("condición", CanonicalField::Condition),
    ("condition", CanonicalField::Condition),
    ("rareza", CanonicalField::Rarity),
    ("rarity", CanonicalField::Rarity),
];

const MARKET_PRICE_COLUMNS: &[(&str, CanonicalField)] = &[
    ("priceloose", CanonicalField::PriceLoose),
    ("pricecib", CanonicalField::PriceCib),
    ("pricenew", CanonicalField::PriceNew),
];

/// Mapping from canonical field to column index, built once per ingestion
/// call from the header row and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct HeaderMap {
    indices: BTreeMap<CanonicalField, usize>,
}

impl HeaderMap {
    pub fn column(&self, field: CanonicalField) -> Option<usize> {
        self.indices.get(&field).copied()
    }

    pub fn contains(&self, field: CanonicalField) -> bool {
        self.indices.contains_key(&field)
    }

    /// Resolved fields with their column indices, in field order.
    pub fn iter(&self) -> impl Iterator<Item = (CanonicalField, usize)> + '_ {
        self.indices.iter().map(|(field, idx)| (*field, *idx))
    }
}

/// Resolve a raw header row into a [`HeaderMap`].
///
/// Fails when any of the hard-mandatory fields (`title`, `platform`,
/// `purchase_price`) cannot be resolved, naming every missing field. No
/// partial map is returned. When duplicate columns resolve to the same
/// field, the later column wins.
pub fn resolve_headers(header_row: &[String]) -> Result<HeaderMap> {
    let mut indices = BTreeMap::new();
    for (idx, raw) in header_row.iter().enumerate() {
        if let Some(field) = lookup(&raw.trim().to_lowercase()) {
            indices.insert(field, idx);
        }
    }

    let missing: Vec<&str> = CanonicalField::MANDATORY
        .iter()
        .filter(|field| !indices.contains_key(field))
        .map(|field| field.as_str())
        .collect();
    if !missing.is_empty() {
        return Err(IngestError::Validation(format!(
            "missing required columns: {}",
            missing.join(", ")
        )));
    }

    Ok(HeaderMap { indices })
}

/// First matching synonym wins; market price columns only match exactly.
fn lookup(header: &str) -> Option<CanonicalField> {
    SYNONYMS
        .iter()
        .chain(MARKET_PRICE_COLUMNS.iter())
        .find(|(synonym, _)| *synonym == header)
        .map(|(_, field)| *field)
}

/// Accepted header spellings for a canonical field, for help output.
pub fn synonyms_for(field: CanonicalField) -> Vec<&'static str> {
    SYNONYMS
        .iter()
        .chain(MARKET_PRICE_COLUMNS.iter())
        .filter(|(_, target)| *target == field)
        .map(|(synonym, _)| *synonym)
        .collect()
}
