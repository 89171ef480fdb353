//! Analysis payload layer: serializes a canonical record set into the
//! expert-collector prompt and models the structured response. The network
//! call to the generative service lives outside this workspace.

pub mod request;
pub mod response;

pub use request::{CSV_COLUMNS, build_prompt, records_to_csv};
pub use response::{
    AnalysisResponse, BuyRecommendation, CollectionSummary, ConsoleFocus, FutureValueGame,
    KeepRecommendation, PlatformDistribution, SellRecommendation, parse_response,
};
