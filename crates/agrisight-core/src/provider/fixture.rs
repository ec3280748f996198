//! Fixture Advisory Provider
//!
//! Serves the bundled sample datasets. Every response is deterministic
//! apart from the metadata timestamps; the pest endpoint never inspects
//! the uploaded bytes.

use async_trait::async_trait;
use chrono::Utc;

use super::AdvisoryProvider;
use crate::error::Result;
use crate::fixtures;
use crate::model::{
    CropContextMetadata, CropSuggestionsResponse, DetectionMetadata,
    FertilizerRecommendationsResponse, MarketMetadata, MarketPricesResponse,
    PestDetectionResponse, RegionMetadata, WeatherResponse, YieldMetadata,
    YieldPredictionResponse,
};

/// Advisory provider backed entirely by in-crate fixtures
#[derive(Default)]
pub struct FixtureAdvisor;

impl FixtureAdvisor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AdvisoryProvider for FixtureAdvisor {
    async fn crop_suggestions(&self) -> Result<CropSuggestionsResponse> {
        Ok(CropSuggestionsResponse {
            success: true,
            suggestions: fixtures::crop_suggestions(),
            metadata: RegionMetadata {
                location: "Maharashtra".into(),
                soil_type: "Alluvial".into(),
                season: "Kharif".into(),
                last_updated: Utc::now(),
            },
        })
    }

    async fn fertilizer_recommendations(&self) -> Result<FertilizerRecommendationsResponse> {
        Ok(FertilizerRecommendationsResponse {
            success: true,
            recommendations: fixtures::fertilizer_recommendations(),
            metadata: CropContextMetadata {
                crop: "Tomato".into(),
                soil_type: "Alluvial".into(),
                season: "Kharif".into(),
                last_updated: Utc::now(),
            },
        })
    }

    async fn market_prices(&self) -> Result<MarketPricesResponse> {
        let prices = fixtures::market_prices();
        let total_markets = prices.len();
        Ok(MarketPricesResponse {
            success: true,
            prices,
            metadata: MarketMetadata {
                last_updated: Utc::now(),
                total_markets,
                price_source: "APMC Official Data".into(),
            },
        })
    }

    async fn weather(&self) -> Result<WeatherResponse> {
        Ok(WeatherResponse {
            success: true,
            current: fixtures::weather_current(),
            alerts: fixtures::weather_alerts(),
            forecast: fixtures::weather_forecast(),
            location: fixtures::weather_location(),
            last_updated: Utc::now(),
        })
    }

    async fn yield_prediction(&self) -> Result<YieldPredictionResponse> {
        Ok(YieldPredictionResponse {
            success: true,
            predictions: fixtures::yield_predictions(),
            metadata: YieldMetadata {
                crop: "Tomato".into(),
                variety: "Hybrid F1".into(),
                farm_size: "2.5 acres".into(),
                soil_type: "Alluvial".into(),
                last_updated: Utc::now(),
            },
        })
    }

    async fn detect_pest(&self, image: &[u8]) -> Result<PestDetectionResponse> {
        // The fixture model never looks at the pixels.
        tracing::debug!(bytes = image.len(), "analysing uploaded plant photo");

        Ok(PestDetectionResponse {
            success: true,
            detection: fixtures::pest_detection(),
            metadata: DetectionMetadata {
                image_processed: true,
                processing_time: "2.3s".into(),
                model_version: "v2.1".into(),
                timestamp: Utc::now(),
            },
        })
    }

    async fn health_check(&self) -> bool {
        true // Fixtures are always available
    }

    fn name(&self) -> &str {
        "FixtureAdvisor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;

    #[tokio::test]
    async fn test_crop_suggestions_envelope() {
        let advisor = FixtureAdvisor::new();
        let response = advisor.crop_suggestions().await.unwrap();

        assert!(response.success);
        assert_eq!(response.suggestions.len(), 4);
        assert_eq!(response.metadata.season, "Kharif");
    }

    #[tokio::test]
    async fn test_detection_ignores_image_content() {
        let advisor = FixtureAdvisor::new();

        let a = advisor.detect_pest(b"leaf").await.unwrap();
        let b = advisor.detect_pest(&[0u8; 64]).await.unwrap();

        assert_eq!(a.detection.pest, b.detection.pest);
        assert_eq!(a.detection.confidence, 87);
        assert_eq!(a.detection.severity, Severity::Medium);
        assert!(a.metadata.image_processed);
    }

    #[tokio::test]
    async fn test_always_healthy() {
        let advisor = FixtureAdvisor::new();
        assert!(advisor.health_check().await);
        assert_eq!(advisor.name(), "FixtureAdvisor");
    }
}
