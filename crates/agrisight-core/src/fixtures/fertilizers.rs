//! Fertilizer recommendation fixtures

use rust_decimal_macros::dec;

use crate::model::{Availability, FertilizerKind, FertilizerRecommendation};

/// Full dataset served by the mock endpoint.
pub fn fertilizer_recommendations() -> Vec<FertilizerRecommendation> {
    vec![
        FertilizerRecommendation {
            id: "1".into(),
            name: "NPK 19:19:19".into(),
            kind: FertilizerKind::Inorganic,
            application_time: "Before planting & during growth".into(),
            quantity: "50-75 kg/acre".into(),
            frequency: "Every 3-4 weeks".into(),
            benefits: vec![
                "Balanced nutrition".into(),
                "Quick absorption".into(),
                "High yield".into(),
            ],
            price: dec!(25),
            availability: Availability::High,
            soil_compatibility: vec![
                "Alluvial".into(),
                "Black Soil".into(),
                "Red Soil".into(),
            ],
            composition: "N: 19%, P: 19%, K: 19%".into(),
            application_method: "Broadcast or side dressing".into(),
            precautions: vec!["Avoid over-application".into(), "Store in dry place".into()],
        },
        FertilizerRecommendation {
            id: "2".into(),
            name: "Vermicompost".into(),
            kind: FertilizerKind::Organic,
            application_time: "During soil preparation".into(),
            quantity: "2-3 tons/acre".into(),
            frequency: "Once per season".into(),
            benefits: vec![
                "Improves soil structure".into(),
                "Long-term fertility".into(),
                "Eco-friendly".into(),
            ],
            price: dec!(8),
            availability: Availability::High,
            soil_compatibility: vec!["All soil types".into()],
            composition: "Organic matter: 60-70%, NPK: 1-2%".into(),
            application_method: "Mix with topsoil".into(),
            precautions: vec![
                "Ensure proper decomposition".into(),
                "Avoid fresh manure".into(),
            ],
        },
        FertilizerRecommendation {
            id: "3".into(),
            name: "Azospirillum Biofertilizer".into(),
            kind: FertilizerKind::Bio,
            application_time: "Seed treatment & soil application".into(),
            quantity: "1-2 kg/acre".into(),
            frequency: "Every 2-3 months".into(),
            benefits: vec![
                "Nitrogen fixation".into(),
                "Root development".into(),
                "Cost effective".into(),
            ],
            price: dec!(120),
            availability: Availability::Medium,
            soil_compatibility: vec!["Alluvial".into(), "Black Soil".into()],
            composition: "Azospirillum: 10^8 CFU/g".into(),
            application_method: "Seed coating or soil drenching".into(),
            precautions: vec!["Store in cool place".into(), "Use within expiry date".into()],
        },
        FertilizerRecommendation {
            id: "4".into(),
            name: "DAP (Diammonium Phosphate)".into(),
            kind: FertilizerKind::Inorganic,
            application_time: "At planting time".into(),
            quantity: "100-150 kg/acre".into(),
            frequency: "Once per season".into(),
            benefits: vec![
                "High phosphorus content".into(),
                "Quick root development".into(),
                "Early maturity".into(),
            ],
            price: dec!(35),
            availability: Availability::High,
            soil_compatibility: vec!["Alluvial".into(), "Black Soil".into()],
            composition: "N: 18%, P: 46%".into(),
            application_method: "Placement near roots".into(),
            precautions: vec![
                "Avoid contact with seeds".into(),
                "Use protective gear".into(),
            ],
        },
    ]
}

/// Subset the dashboard card renders before its background refresh lands.
pub fn fertilizer_recommendations_fallback() -> Vec<FertilizerRecommendation> {
    let mut recommendations = fertilizer_recommendations();
    recommendations.truncate(3);
    recommendations
}
