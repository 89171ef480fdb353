use serde::{Deserialize, Serialize};

/// Closed set of normalized record attributes that all header synonyms
/// resolve to. Keeping this an enum lets the compiler catch a coercer
/// branch that forgets a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    Title,
    Platform,
    Genre,
    Year,
    PurchasePrice,
    Condition,
    Rarity,
    PriceLoose,
    PriceCib,
    PriceNew,
}

impl CanonicalField {
    /// The seven base fields resolvable through the synonym table.
    /// Market-price fields are matched by exact column name instead.
    pub const BASE: [CanonicalField; 7] = [
        CanonicalField::Title,
        CanonicalField::Platform,
        CanonicalField::Genre,
        CanonicalField::Year,
        CanonicalField::PurchasePrice,
        CanonicalField::Condition,
        CanonicalField::Rarity,
    ];

    /// Fields that must resolve to a column or header resolution fails.
    pub const MANDATORY: [CanonicalField; 3] = [
        CanonicalField::Title,
        CanonicalField::Platform,
        CanonicalField::PurchasePrice,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CanonicalField::Title => "title",
            CanonicalField::Platform => "platform",
            CanonicalField::Genre => "genre",
            CanonicalField::Year => "year",
            CanonicalField::PurchasePrice => "purchase_price",
            CanonicalField::Condition => "condition",
            CanonicalField::Rarity => "rarity",
            CanonicalField::PriceLoose => "price_loose",
            CanonicalField::PriceCib => "price_cib",
            CanonicalField::PriceNew => "price_new",
        }
    }

    pub fn is_mandatory(self) -> bool {
        Self::MANDATORY.contains(&self)
    }
}

impl std::fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
