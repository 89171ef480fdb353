//! Typed models for the structured analysis response.
//!
//! Mirrors the JSON schema the analysis service is asked to honor. Parsing
//! is strict on shape but lenient on extras: unknown keys are ignored and
//! list sections default to empty.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub summary: CollectionSummary,
    #[serde(default)]
    pub console_focus: Option<ConsoleFocus>,
    #[serde(default)]
    pub sell_recommendations: Vec<SellRecommendation>,
    #[serde(default)]
    pub keep_recommendations: Vec<KeepRecommendation>,
    #[serde(default)]
    pub buy_recommendations: Vec<BuyRecommendation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionSummary {
    pub total_games: u64,
    pub estimated_collection_value: f64,
    pub predominant_decade: String,
    #[serde(default)]
    pub platform_distribution: Vec<PlatformDistribution>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformDistribution {
    pub platform: String,
    pub count: u64,
    pub total_value: f64,
    pub average_value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleFocus {
    pub platform: String,
    pub reason: String,
    #[serde(default)]
    pub future_value_games: Vec<FutureValueGame>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FutureValueGame {
    pub game: String,
    pub current_price_range: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellRecommendation {
    pub game: String,
    pub platform: String,
    pub reason: String,
    pub estimated_sale_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeepRecommendation {
    pub game: String,
    pub platform: String,
    pub reason: String,
    pub estimated_future_value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuyRecommendation {
    pub game: String,
    pub platform: String,
    pub reason: String,
    pub target_price: f64,
}

/// Parse a raw response body into the typed model.
pub fn parse_response(body: &str) -> Result<AnalysisResponse, serde_json::Error> {
    serde_json::from_str(body)
}
