//! Domain Models
//!
//! Wire-format data types for the dashboard features and the mock advisory
//! endpoints. Field names serialize in camelCase to match the JSON
//! contract consumed by the frontend. Money values use `rust_decimal` -
//! never use f64 for money!

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Closed vocabularies
// ============================================================================

/// Water demand of a crop across its growth period
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterRequirement {
    Low,
    Medium,
    High,
}

/// Fertilizer category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FertilizerKind {
    Organic,
    Inorganic,
    Bio,
}

/// Market availability of an input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    High,
    Medium,
    Low,
}

/// Severity of a detected pest infestation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Weather alert classification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Warning,
    Info,
    Danger,
}

// ============================================================================
// Crop suggestions
// ============================================================================

/// A crop recommended for the farmer's region and soil
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropSuggestion {
    pub id: String,

    pub name: String,

    /// Cultivar, e.g. "Hybrid F1"
    pub variety: String,

    /// Fit for the farmer's conditions, 0-100
    pub suitability: u8,

    pub planting_season: String,

    pub expected_yield: String,

    /// Current wholesale price per kg
    pub market_price: Decimal,

    pub growth_period: String,

    pub water_requirement: WaterRequirement,

    pub soil_compatibility: Vec<String>,

    pub benefits: Vec<String>,

    pub challenges: Vec<String>,

    /// Upfront cost range per acre
    pub investment: String,

    pub profit_potential: String,
}

/// Region context attached to crop suggestion responses
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionMetadata {
    pub location: String,
    pub soil_type: String,
    pub season: String,
    pub last_updated: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropSuggestionsResponse {
    pub success: bool,
    pub suggestions: Vec<CropSuggestion>,
    pub metadata: RegionMetadata,
}

// ============================================================================
// Fertilizer recommendations
// ============================================================================

/// A fertilizer product matched to the farmer's crop and soil
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FertilizerRecommendation {
    pub id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub kind: FertilizerKind,

    pub application_time: String,

    pub quantity: String,

    pub frequency: String,

    pub benefits: Vec<String>,

    /// Price per kg
    pub price: Decimal,

    pub availability: Availability,

    pub soil_compatibility: Vec<String>,

    /// Nutrient makeup, e.g. "N: 19%, P: 19%, K: 19%"
    pub composition: String,

    pub application_method: String,

    pub precautions: Vec<String>,
}

/// Crop context attached to fertilizer responses
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropContextMetadata {
    pub crop: String,
    pub soil_type: String,
    pub season: String,
    pub last_updated: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FertilizerRecommendationsResponse {
    pub success: bool,
    pub recommendations: Vec<FertilizerRecommendation>,
    pub metadata: CropContextMetadata,
}

// ============================================================================
// Market prices
// ============================================================================

/// One point on a price trend line
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: String,
    pub price: Decimal,
}

/// Supply-side detail for a mandi listing
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketDetails {
    pub volume: String,
    pub quality: String,
    pub demand: String,
}

/// Current mandi price for a crop
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPrice {
    pub id: String,

    pub crop: String,

    pub current_price: Decimal,

    pub previous_price: Decimal,

    /// Must equal `current_price - previous_price` for a valid fixture
    pub change: Decimal,

    pub change_percent: Decimal,

    pub unit: String,

    pub market: String,

    pub last_updated: String,

    /// Ordered monthly trend, oldest first
    pub trend: Vec<PricePoint>,

    pub market_details: MarketDetails,
}

impl MarketPrice {
    /// Whether the stated change agrees with the two price points.
    pub fn is_consistent(&self) -> bool {
        self.change == self.current_price - self.previous_price
    }

    /// True when the price moved up since the previous reading.
    pub fn is_rising(&self) -> bool {
        self.change > Decimal::ZERO
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketMetadata {
    pub last_updated: DateTime<Utc>,
    pub total_markets: usize,
    pub price_source: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPricesResponse {
    pub success: bool,
    pub prices: Vec<MarketPrice>,
    pub metadata: MarketMetadata,
}

// ============================================================================
// Weather
// ============================================================================

/// Current observed conditions
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    /// Degrees Celsius
    pub temperature: i32,

    /// Relative humidity, percent
    pub humidity: u8,

    /// km/h
    pub wind_speed: u32,

    pub condition: String,

    pub icon: String,

    pub feels_like: i32,

    pub uv_index: u8,

    /// Kilometres
    pub visibility: u32,
}

/// An active advisory for the farmer's area
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherAlert {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: AlertKind,

    pub title: String,

    pub description: String,

    /// Relative display time, e.g. "2 hours ago"
    pub time: String,

    pub severity: String,
}

/// One day of the forward forecast
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    pub day: String,
    pub high: i32,
    pub low: i32,
    pub condition: String,
    /// Chance of rain, percent
    pub precipitation: u8,
    pub wind_speed: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub city: String,
    pub state: String,
    pub coordinates: Coordinates,
}

/// Full weather payload: observation, alerts, and five-day forecast
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherResponse {
    pub success: bool,
    pub current: CurrentConditions,
    pub alerts: Vec<WeatherAlert>,
    pub forecast: Vec<DailyForecast>,
    pub location: Location,
    pub last_updated: DateTime<Utc>,
}

// ============================================================================
// Yield prediction
// ============================================================================

/// Predicted vs observed yield for one month, in quintals
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct YieldPoint {
    pub month: String,
    pub predicted: u32,
    pub actual: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldMetadata {
    pub crop: String,
    pub variety: String,
    pub farm_size: String,
    pub soil_type: String,
    pub last_updated: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldPredictionResponse {
    pub success: bool,
    pub predictions: Vec<YieldPoint>,
    pub metadata: YieldMetadata,
}

// ============================================================================
// Pest detection
// ============================================================================

/// A lower-confidence alternative identification
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PestCandidate {
    pub name: String,
    pub confidence: u8,
}

/// Result of analysing an uploaded plant photo
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PestDetection {
    pub pest: String,

    /// 0-100
    pub confidence: u8,

    pub severity: Severity,

    pub recommendations: Vec<String>,

    pub alternative_pests: Vec<PestCandidate>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionMetadata {
    pub image_processed: bool,
    pub processing_time: String,
    pub model_version: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PestDetectionResponse {
    pub success: bool,
    pub detection: PestDetection,
    pub metadata: DetectionMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_price() -> MarketPrice {
        MarketPrice {
            id: "1".into(),
            crop: "Tomato".into(),
            current_price: dec!(45),
            previous_price: dec!(42),
            change: dec!(3),
            change_percent: dec!(7.14),
            unit: "kg".into(),
            market: "Mumbai APMC".into(),
            last_updated: "2 hours ago".into(),
            trend: vec![PricePoint {
                date: "Jun".into(),
                price: dec!(45),
            }],
            market_details: MarketDetails {
                volume: "150 tons".into(),
                quality: "Grade A".into(),
                demand: "High".into(),
            },
        }
    }

    #[test]
    fn test_market_price_consistency() {
        let mut price = sample_price();
        assert!(price.is_consistent());
        assert!(price.is_rising());

        price.change = dec!(4);
        assert!(!price.is_consistent());
    }

    #[test]
    fn test_camel_case_wire_names() {
        let json = serde_json::to_value(sample_price()).unwrap();
        assert!(json.get("currentPrice").is_some());
        assert!(json.get("changePercent").is_some());
        assert!(json.get("marketDetails").is_some());
        assert!(json.get("current_price").is_none());
    }

    #[test]
    fn test_enum_wire_values() {
        assert_eq!(
            serde_json::to_string(&WaterRequirement::Medium).unwrap(),
            "\"medium\""
        );
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
        assert_eq!(
            serde_json::to_string(&FertilizerKind::Bio).unwrap(),
            "\"bio\""
        );
        assert_eq!(
            serde_json::to_string(&AlertKind::Warning).unwrap(),
            "\"warning\""
        );
    }

    #[test]
    fn test_fertilizer_type_field_name() {
        let rec = FertilizerRecommendation {
            id: "1".into(),
            name: "Vermicompost".into(),
            kind: FertilizerKind::Organic,
            application_time: "During soil preparation".into(),
            quantity: "2-3 tons/acre".into(),
            frequency: "Once per season".into(),
            benefits: vec!["Improves soil structure".into()],
            price: dec!(8),
            availability: Availability::High,
            soil_compatibility: vec!["All soil types".into()],
            composition: "Organic matter: 60-70%, NPK: 1-2%".into(),
            application_method: "Mix with topsoil".into(),
            precautions: vec!["Avoid fresh manure".into()],
        };
        let json = serde_json::to_value(rec).unwrap();
        assert_eq!(json["type"], "organic");
        assert_eq!(json["applicationTime"], "During soil preparation");
    }
}
