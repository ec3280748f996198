//! Market price fixtures

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model::{MarketDetails, MarketPrice, PricePoint};

fn trend(points: [(&str, Decimal); 6]) -> Vec<PricePoint> {
    points
        .into_iter()
        .map(|(date, price)| PricePoint {
            date: date.into(),
            price,
        })
        .collect()
}

/// Full dataset served by the mock endpoint.
pub fn market_prices() -> Vec<MarketPrice> {
    vec![
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
            trend: trend([
                ("Jan", dec!(38)),
                ("Feb", dec!(42)),
                ("Mar", dec!(40)),
                ("Apr", dec!(45)),
                ("May", dec!(48)),
                ("Jun", dec!(45)),
            ]),
            market_details: MarketDetails {
                volume: "150 tons".into(),
                quality: "Grade A".into(),
                demand: "High".into(),
            },
        },
        MarketPrice {
            id: "2".into(),
            crop: "Onion".into(),
            current_price: dec!(28),
            previous_price: dec!(32),
            change: dec!(-4),
            change_percent: dec!(-12.5),
            unit: "kg".into(),
            market: "Delhi APMC".into(),
            last_updated: "1 hour ago".into(),
            trend: trend([
                ("Jan", dec!(35)),
                ("Feb", dec!(38)),
                ("Mar", dec!(32)),
                ("Apr", dec!(30)),
                ("May", dec!(28)),
                ("Jun", dec!(28)),
            ]),
            market_details: MarketDetails {
                volume: "200 tons".into(),
                quality: "Grade A".into(),
                demand: "Medium".into(),
            },
        },
        MarketPrice {
            id: "3".into(),
            crop: "Potato".into(),
            current_price: dec!(22),
            previous_price: dec!(20),
            change: dec!(2),
            change_percent: dec!(10),
            unit: "kg".into(),
            market: "Kolkata APMC".into(),
            last_updated: "3 hours ago".into(),
            trend: trend([
                ("Jan", dec!(18)),
                ("Feb", dec!(20)),
                ("Mar", dec!(22)),
                ("Apr", dec!(25)),
                ("May", dec!(23)),
                ("Jun", dec!(22)),
            ]),
            market_details: MarketDetails {
                volume: "300 tons".into(),
                quality: "Grade A".into(),
                demand: "High".into(),
            },
        },
        MarketPrice {
            id: "4".into(),
            crop: "Capsicum".into(),
            current_price: dec!(60),
            previous_price: dec!(58),
            change: dec!(2),
            change_percent: dec!(3.45),
            unit: "kg".into(),
            market: "Bangalore APMC".into(),
            last_updated: "4 hours ago".into(),
            trend: trend([
                ("Jan", dec!(55)),
                ("Feb", dec!(58)),
                ("Mar", dec!(62)),
                ("Apr", dec!(65)),
                ("May", dec!(60)),
                ("Jun", dec!(60)),
            ]),
            market_details: MarketDetails {
                volume: "80 tons".into(),
                quality: "Grade A".into(),
                demand: "High".into(),
            },
        },
    ]
}

/// Subset the dashboard card renders before its background refresh lands.
pub fn market_prices_fallback() -> Vec<MarketPrice> {
    let mut prices = market_prices();
    prices.truncate(3);
    prices
}
