use serde::{Deserialize, Serialize};

/// One normalized collection item.
///
/// Invariants for a record that passed validation: `title` and `platform`
/// are non-empty and `purchase_price >= 0`. Market-price fields are only
/// present when the source supplied a positive value for that column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub title: String,
    pub platform: String,
    pub genre: String,
    pub year: i32,
    pub purchase_price: f64,
    pub condition: String,
    pub rarity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_loose: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_cib: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_new: Option<f64>,
}

/// Sentinel values substituted when an optional string field is absent.
///
/// Kept as configuration so the display locale can change without touching
/// coercion logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDefaults {
    pub genre: String,
    pub condition: String,
    pub rarity: String,
}

impl Default for RecordDefaults {
    fn default() -> Self {
        Self {
            genre: "unspecified".to_string(),
            condition: "used".to_string(),
            rarity: "common".to_string(),
        }
    }
}
