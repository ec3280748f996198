//! API Client
//!
//! Typed fetch layer over the local endpoints. Errors collapse to strings;
//! the cards log them and keep their fallback data, the profile form
//! surfaces them in a toast.

use agrisight_core::{
    CropSuggestion, CropSuggestionsResponse, FarmerProfile, FertilizerRecommendation,
    FertilizerRecommendationsResponse, MarketPrice, MarketPricesResponse, PestDetection,
    PestDetectionResponse, ProfileSubmission, WeatherResponse, YieldPoint,
    YieldPredictionResponse,
};

/// Absolute URL for a same-origin endpoint.
fn endpoint(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into());

    format!("{origin}{path}")
}

async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = reqwest::Client::new()
        .get(endpoint(path))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        return Err(format!("{path} returned {}", response.status()));
    }

    response.json::<T>().await.map_err(|e| e.to_string())
}

pub async fn fetch_crop_suggestions() -> Result<Vec<CropSuggestion>, String> {
    let response: CropSuggestionsResponse = get_json("/api/mock/crop-suggestions").await?;
    Ok(response.suggestions)
}

pub async fn fetch_fertilizer_recommendations() -> Result<Vec<FertilizerRecommendation>, String> {
    let response: FertilizerRecommendationsResponse =
        get_json("/api/mock/fertilizer-recommendations").await?;
    Ok(response.recommendations)
}

pub async fn fetch_market_prices() -> Result<Vec<MarketPrice>, String> {
    let response: MarketPricesResponse = get_json("/api/mock/market-prices").await?;
    Ok(response.prices)
}

/// The weather card consumes the whole snapshot, so the full envelope
/// comes back instead of a single payload list.
pub async fn fetch_weather() -> Result<WeatherResponse, String> {
    get_json("/api/mock/weather").await
}

pub async fn fetch_yield_prediction() -> Result<Vec<YieldPoint>, String> {
    let response: YieldPredictionResponse = get_json("/api/mock/yield-prediction").await?;
    Ok(response.predictions)
}

/// Submit the intake form. A non-2xx response surfaces the server's
/// `error` message so the form can toast it verbatim.
pub async fn submit_profile(submission: &ProfileSubmission) -> Result<FarmerProfile, String> {
    let response = reqwest::Client::new()
        .post(endpoint("/api/profile"))
        .json(submission)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        response.json().await.map_err(|e| e.to_string())
    } else {
        let data: serde_json::Value = response.json().await.unwrap_or_default();
        Err(data["error"]
            .as_str()
            .unwrap_or("Profile save failed")
            .to_string())
    }
}

/// Upload a plant photo for analysis.
pub async fn detect_pest(
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
) -> Result<PestDetection, String> {
    let part = reqwest::multipart::Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(&content_type)
        .map_err(|e| e.to_string())?;
    let form = reqwest::multipart::Form::new().part("image", part);

    let response = reqwest::Client::new()
        .post(endpoint("/api/mock/pest-detection"))
        .multipart(form)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        return Err(format!("detection returned {}", response.status()));
    }

    let body: PestDetectionResponse = response.json().await.map_err(|e| e.to_string())?;
    Ok(body.detection)
}
