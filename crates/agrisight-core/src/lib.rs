//! # agrisight-core
//!
//! Domain models, fixture datasets, and advisory data providers for the
//! AgriSight farmer dashboard.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      AgriSight                              │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────┐  │
//! │  │   Profile   │  │   Fixture   │  │  AdvisoryProvider   │  │
//! │  │   Intake    │──│   Datasets  │──│   (Strategy)        │  │
//! │  └─────────────┘  └─────────────┘  └─────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `AdvisoryProvider` trait enables swapping the bundled fixture
//! provider for a real inference or market-data service without changing
//! the HTTP handlers or the dashboard UI.

pub mod error;
pub mod fixtures;
pub mod model;
pub mod profile;
pub mod provider;

pub use error::{AgriError, Result};
pub use model::{
    AlertKind, Availability, CropSuggestion, CropSuggestionsResponse, CurrentConditions,
    DailyForecast, FertilizerKind, FertilizerRecommendation, FertilizerRecommendationsResponse,
    MarketPrice, MarketPricesResponse, PestDetection, PestDetectionResponse, Severity,
    WaterRequirement, WeatherAlert, WeatherResponse, YieldPoint, YieldPredictionResponse,
};
pub use profile::{FarmerProfile, ProfileSubmission, REQUIRED_PROFILE_FIELDS};
pub use provider::{AdvisoryProvider, FixtureAdvisor};

/// Upload ceiling for plant photos submitted to pest detection.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Validate a plant photo against the upload constraints before it is sent
/// anywhere. The detection backend never inspects the pixels, so this is
/// the only gate an upload passes through.
pub fn validate_plant_image(content_type: &str, len: usize) -> Result<()> {
    if !content_type.starts_with("image/") {
        return Err(AgriError::UnsupportedImageType(content_type.into()));
    }
    if len > MAX_IMAGE_BYTES {
        return Err(AgriError::ImageTooLarge {
            size: len,
            max: MAX_IMAGE_BYTES,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_small_images() {
        assert!(validate_plant_image("image/jpeg", 1024).is_ok());
        assert!(validate_plant_image("image/png", MAX_IMAGE_BYTES).is_ok());
    }

    #[test]
    fn rejects_oversize_and_non_images() {
        assert!(validate_plant_image("image/jpeg", MAX_IMAGE_BYTES + 1).is_err());
        assert!(validate_plant_image("application/pdf", 10).is_err());
    }
}
