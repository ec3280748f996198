//! Advisory Data Providers
//!
//! Abstractions over the services backing the dashboard features.

mod fixture;

pub use fixture::FixtureAdvisor;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{
    CropSuggestionsResponse, FertilizerRecommendationsResponse, MarketPricesResponse,
    PestDetectionResponse, WeatherResponse, YieldPredictionResponse,
};

/// Advisory provider trait (Strategy pattern)
///
/// Implement this for each backing source: the bundled fixtures, a real
/// inference service, a market-data feed, etc.
#[async_trait]
pub trait AdvisoryProvider: Send + Sync {
    /// Crops recommended for the farmer's region
    async fn crop_suggestions(&self) -> Result<CropSuggestionsResponse>;

    /// Fertilizers matched to crop and soil
    async fn fertilizer_recommendations(&self) -> Result<FertilizerRecommendationsResponse>;

    /// Current mandi prices with trends
    async fn market_prices(&self) -> Result<MarketPricesResponse>;

    /// Observation, alerts, and forecast
    async fn weather(&self) -> Result<WeatherResponse>;

    /// Predicted vs observed yield curve
    async fn yield_prediction(&self) -> Result<YieldPredictionResponse>;

    /// Analyse an uploaded plant photo
    async fn detect_pest(&self, image: &[u8]) -> Result<PestDetectionResponse>;

    /// Check if the provider is available
    async fn health_check(&self) -> bool;

    /// Provider name
    fn name(&self) -> &str;
}
