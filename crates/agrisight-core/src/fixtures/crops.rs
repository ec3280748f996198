//! Crop suggestion fixtures

use rust_decimal_macros::dec;

use crate::model::{CropSuggestion, WaterRequirement};

/// Full dataset served by the mock endpoint.
pub fn crop_suggestions() -> Vec<CropSuggestion> {
    vec![
        CropSuggestion {
            id: "1".into(),
            name: "Tomato".into(),
            variety: "Hybrid F1".into(),
            suitability: 92,
            planting_season: "Oct - Dec".into(),
            expected_yield: "25-30 tons/acre".into(),
            market_price: dec!(45),
            growth_period: "90-120 days".into(),
            water_requirement: WaterRequirement::Medium,
            soil_compatibility: vec!["Alluvial".into(), "Black Soil".into()],
            benefits: vec![
                "High market demand".into(),
                "Good profit margin".into(),
                "Multiple harvests".into(),
            ],
            challenges: vec!["Pest susceptibility".into(), "Water management".into()],
            investment: "₹50,000-70,000/acre".into(),
            profit_potential: "High".into(),
        },
        CropSuggestion {
            id: "2".into(),
            name: "Okra".into(),
            variety: "Pusa Sawani".into(),
            suitability: 88,
            planting_season: "Mar - May".into(),
            expected_yield: "8-12 tons/acre".into(),
            market_price: dec!(35),
            growth_period: "60-80 days".into(),
            water_requirement: WaterRequirement::Low,
            soil_compatibility: vec!["Alluvial".into(), "Red Soil".into()],
            benefits: vec![
                "Drought resistant".into(),
                "Quick harvest".into(),
                "Export potential".into(),
            ],
            challenges: vec!["Harvest timing".into(), "Market price fluctuation".into()],
            investment: "₹25,000-35,000/acre".into(),
            profit_potential: "Medium".into(),
        },
        CropSuggestion {
            id: "3".into(),
            name: "Capsicum".into(),
            variety: "California Wonder".into(),
            suitability: 85,
            planting_season: "Aug - Oct".into(),
            expected_yield: "15-20 tons/acre".into(),
            market_price: dec!(60),
            growth_period: "100-120 days".into(),
            water_requirement: WaterRequirement::Medium,
            soil_compatibility: vec!["Alluvial".into(), "Black Soil".into()],
            benefits: vec![
                "High value crop".into(),
                "Good shelf life".into(),
                "Processing industry demand".into(),
            ],
            challenges: vec![
                "Temperature sensitivity".into(),
                "Disease management".into(),
            ],
            investment: "₹60,000-80,000/acre".into(),
            profit_potential: "High".into(),
        },
        CropSuggestion {
            id: "4".into(),
            name: "Brinjal".into(),
            variety: "Pusa Purple Long".into(),
            suitability: 82,
            planting_season: "Jun - Aug".into(),
            expected_yield: "20-25 tons/acre".into(),
            market_price: dec!(30),
            growth_period: "120-150 days".into(),
            water_requirement: WaterRequirement::Medium,
            soil_compatibility: vec![
                "Alluvial".into(),
                "Black Soil".into(),
                "Red Soil".into(),
            ],
            benefits: vec![
                "Year-round demand".into(),
                "Multiple varieties".into(),
                "Local market".into(),
            ],
            challenges: vec!["Fruit borer".into(), "Harvest management".into()],
            investment: "₹40,000-55,000/acre".into(),
            profit_potential: "Medium".into(),
        },
    ]
}

/// Subset the dashboard card renders before its background refresh lands.
pub fn crop_suggestions_fallback() -> Vec<CropSuggestion> {
    let mut suggestions = crop_suggestions();
    suggestions.truncate(3);
    suggestions
}
