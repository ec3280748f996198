//! Fixture Datasets
//!
//! Hard-coded sample payloads returned unconditionally by the fixture
//! advisory provider, plus the client-bundled fallback subsets the
//! dashboard cards seed themselves with before any network round trip.

mod crops;
mod fertilizers;
mod market;
mod pests;
mod weather;
mod yields;

pub use crops::{crop_suggestions, crop_suggestions_fallback};
pub use fertilizers::{fertilizer_recommendations, fertilizer_recommendations_fallback};
pub use market::{market_prices, market_prices_fallback};
pub use pests::{pest_detection, pest_detection_fallback};
pub use weather::{weather_alerts, weather_current, weather_forecast, weather_location};
pub use yields::yield_predictions;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suitability_and_confidence_ranges() {
        assert!(crop_suggestions().iter().all(|s| s.suitability <= 100));

        let detection = pest_detection();
        assert!(detection.confidence <= 100);
        assert!(detection
            .alternative_pests
            .iter()
            .all(|p| p.confidence <= 100));
    }

    #[test]
    fn test_market_fixtures_hold_change_invariant() {
        let prices = market_prices();
        assert!(!prices.is_empty());
        for price in &prices {
            assert!(price.is_consistent(), "{} fixture is inconsistent", price.crop);
            assert_eq!(price.trend.len(), 6);
        }
    }

    #[test]
    fn test_fallbacks_are_prefixes_of_fixtures() {
        assert_eq!(crop_suggestions_fallback().len(), 3);
        assert_eq!(market_prices_fallback().len(), 3);
        assert_eq!(fertilizer_recommendations_fallback().len(), 3);

        let all: Vec<String> = crop_suggestions().into_iter().map(|s| s.name).collect();
        let fallback: Vec<String> = crop_suggestions_fallback()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(&all[..3], &fallback[..]);
    }

    #[test]
    fn test_weather_shape() {
        assert_eq!(weather_forecast().len(), 5);
        assert_eq!(weather_alerts().len(), 2);
        assert_eq!(weather_location().city, "Mumbai");
    }

    #[test]
    fn test_yield_curve_is_monotonic_fixture() {
        let points = yield_predictions();
        assert_eq!(points.len(), 6);
        for pair in points.windows(2) {
            assert!(pair[1].predicted > pair[0].predicted);
        }
    }
}
