//! Dashboard Cards
//!
//! One card per feature. Apart from pest detection, every card follows
//! the same state machine: seed from the bundled fallback synchronously,
//! then refresh once from the mock endpoint in the background. Failures
//! keep the fallback and are logged only.

mod crop_suggestions;
mod fertilizer_recommendations;
mod market_prices;
mod pest_detection;
mod weather_alerts;
mod yield_prediction;

pub use crop_suggestions::CropSuggestionsCard;
pub use fertilizer_recommendations::FertilizerRecommendationsCard;
pub use market_prices::MarketPricesCard;
pub use pest_detection::PestDetectionCard;
pub use weather_alerts::WeatherAlertsCard;
pub use yield_prediction::YieldPredictionCard;
