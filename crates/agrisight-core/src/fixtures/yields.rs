//! Yield prediction fixtures

use crate::model::YieldPoint;

/// Predicted vs observed monthly yield curve.
pub fn yield_predictions() -> Vec<YieldPoint> {
    let months: [(&str, u32, u32); 6] = [
        ("Jan", 120, 115),
        ("Feb", 135, 130),
        ("Mar", 150, 145),
        ("Apr", 165, 160),
        ("May", 180, 175),
        ("Jun", 195, 190),
    ];

    months
        .into_iter()
        .map(|(month, predicted, actual)| YieldPoint {
            month: month.into(),
            predicted,
            actual,
        })
        .collect()
}
