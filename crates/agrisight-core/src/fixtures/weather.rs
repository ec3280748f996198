//! Weather fixtures

use crate::model::{
    AlertKind, Coordinates, CurrentConditions, DailyForecast, Location, WeatherAlert,
};

pub fn weather_current() -> CurrentConditions {
    CurrentConditions {
        temperature: 28,
        humidity: 65,
        wind_speed: 12,
        condition: "Partly Cloudy".into(),
        icon: "cloud".into(),
        feels_like: 30,
        uv_index: 6,
        visibility: 10,
    }
}

pub fn weather_alerts() -> Vec<WeatherAlert> {
    vec![
        WeatherAlert {
            id: "1".into(),
            kind: AlertKind::Warning,
            title: "Heavy Rain Expected".into(),
            description: "Heavy rainfall expected in the next 24 hours. Consider delaying \
                          irrigation and protect sensitive crops."
                .into(),
            time: "2 hours ago".into(),
            severity: "moderate".into(),
        },
        WeatherAlert {
            id: "2".into(),
            kind: AlertKind::Info,
            title: "Temperature Drop".into(),
            description: "Temperature will drop to 15°C tonight. Protect sensitive crops \
                          with covers."
                .into(),
            time: "4 hours ago".into(),
            severity: "low".into(),
        },
    ]
}

pub fn weather_forecast() -> Vec<DailyForecast> {
    let days: [(&str, i32, i32, &str, u8, u32); 5] = [
        ("Today", 32, 18, "Sunny", 0, 8),
        ("Tomorrow", 28, 16, "Rainy", 80, 15),
        ("Wed", 26, 14, "Cloudy", 20, 12),
        ("Thu", 30, 17, "Sunny", 0, 6),
        ("Fri", 33, 19, "Partly Cloudy", 10, 9),
    ];

    days.into_iter()
        .map(
            |(day, high, low, condition, precipitation, wind_speed)| DailyForecast {
                day: day.into(),
                high,
                low,
                condition: condition.into(),
                precipitation,
                wind_speed,
            },
        )
        .collect()
}

pub fn weather_location() -> Location {
    Location {
        city: "Mumbai".into(),
        state: "Maharashtra".into(),
        coordinates: Coordinates {
            lat: 19.0760,
            lon: 72.8777,
        },
    }
}
