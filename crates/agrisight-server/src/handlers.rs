//! HTTP Handlers

use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
};
use chrono::Utc;
use serde::Serialize;

use agrisight_core::{
    CropSuggestionsResponse, FarmerProfile, FertilizerRecommendationsResponse,
    MarketPricesResponse, PestDetectionResponse, ProfileSubmission, WeatherResponse,
    YieldPredictionResponse,
};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub advisor: String,
    pub advisor_connected: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn internal_error(error: agrisight_core::AgriError) -> HandlerError {
    tracing::error!("advisory source error: {}", error);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: error.user_message(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let advisor_connected = state.advisor.health_check().await;

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        advisor: state.advisor.name().to_string(),
        advisor_connected,
    })
}

/// Crop suggestions fixture endpoint
pub async fn crop_suggestions(
    State(state): State<AppState>,
) -> Result<Json<CropSuggestionsResponse>, HandlerError> {
    state
        .advisor
        .crop_suggestions()
        .await
        .map(Json)
        .map_err(internal_error)
}

/// Fertilizer recommendations fixture endpoint
pub async fn fertilizer_recommendations(
    State(state): State<AppState>,
) -> Result<Json<FertilizerRecommendationsResponse>, HandlerError> {
    state
        .advisor
        .fertilizer_recommendations()
        .await
        .map(Json)
        .map_err(internal_error)
}

/// Market prices fixture endpoint
pub async fn market_prices(
    State(state): State<AppState>,
) -> Result<Json<MarketPricesResponse>, HandlerError> {
    state
        .advisor
        .market_prices()
        .await
        .map(Json)
        .map_err(internal_error)
}

/// Weather fixture endpoint
pub async fn weather(
    State(state): State<AppState>,
) -> Result<Json<WeatherResponse>, HandlerError> {
    state.advisor.weather().await.map(Json).map_err(internal_error)
}

/// Yield prediction fixture endpoint
pub async fn yield_prediction(
    State(state): State<AppState>,
) -> Result<Json<YieldPredictionResponse>, HandlerError> {
    state
        .advisor
        .yield_prediction()
        .await
        .map(Json)
        .map_err(internal_error)
}

/// Pest detection upload endpoint
///
/// Expects a multipart body with an `image` field. The image content is
/// handed to the advisory provider untouched; the fixture provider never
/// inspects it.
pub async fn detect_pest(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<PestDetectionResponse>, HandlerError> {
    let mut image = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() == Some("image") {
                    let bytes = field.bytes().await.map_err(|e| {
                        tracing::error!("error reading pest detection upload: {}", e);
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            Json(ErrorResponse {
                                error: "Failed to process image".into(),
                            }),
                        )
                    })?;
                    image = Some(bytes);
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::error!("error processing pest detection form: {}", e);
                return Err((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Failed to process image".into(),
                    }),
                ));
            }
        }
    }

    let Some(image) = image else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No image provided".into(),
            }),
        ));
    };

    state
        .advisor
        .detect_pest(&image)
        .await
        .map(Json)
        .map_err(internal_error)
}

/// Profile intake endpoint
///
/// Validates the required fields, synthesizes an id, and echoes the
/// enriched profile back. Nothing is persisted; the profile object is
/// logged as the only side effect. A body that is not valid JSON maps to
/// a generic 500, matching the original contract.
pub async fn save_profile(body: String) -> Result<Json<FarmerProfile>, HandlerError> {
    let submission: ProfileSubmission = match serde_json::from_str(&body) {
        Ok(submission) => submission,
        Err(e) => {
            tracing::error!("error saving profile: {}", e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal server error".into(),
                }),
            ));
        }
    };

    let missing = submission.missing_fields();
    if !missing.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Missing required fields: {}", missing.join(", ")),
            }),
        ));
    }

    let profile = FarmerProfile::from_submission(submission, synthesize_profile_id())
        .map_err(internal_error)?;

    tracing::info!(
        "profile saved: {}",
        serde_json::to_string(&profile).unwrap_or_default()
    );

    Ok(Json(profile))
}

/// Timestamp plus a random suffix; unique within and across processes.
fn synthesize_profile_id() -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("profile_{}_{}", Utc::now().timestamp_millis(), &suffix[..9])
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
        response::Response,
    };
    use tower::ServiceExt;

    use agrisight_core::FixtureAdvisor;

    use crate::state::AppState;

    fn test_app() -> Router {
        crate::app(AppState {
            advisor: Arc::new(FixtureAdvisor::new()),
        })
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn profile_request(body: &str) -> Request<Body> {
        Request::post("/api/profile")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_request(field: &str) -> Request<Body> {
        let boundary = "agrisight-test-boundary";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"leaf.jpg\"\r\n\
             Content-Type: image/jpeg\r\n\r\n\
             not-really-a-jpeg\r\n\
             --{boundary}--\r\n"
        );
        Request::post("/api/mock/pest-detection")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    const VALID_PROFILE: &str = r#"{
        "state": "Odisha",
        "district": "Cuttack",
        "farmSize": "2",
        "soilType": "Alluvial Soil",
        "irrigation": "Drip Irrigation"
    }"#;

    #[tokio::test]
    async fn health_reports_fixture_advisor() {
        let response = test_app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["advisor"], "FixtureAdvisor");
        assert_eq!(json["advisor_connected"], true);
    }

    #[tokio::test]
    async fn fixture_endpoints_return_success_envelopes() {
        let routes = [
            ("/api/mock/crop-suggestions", "suggestions"),
            ("/api/mock/fertilizer-recommendations", "recommendations"),
            ("/api/mock/market-prices", "prices"),
            ("/api/mock/yield-prediction", "predictions"),
        ];

        for (route, payload_key) in routes {
            let response = test_app()
                .oneshot(Request::get(route).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "{route}");
            let json = body_json(response).await;
            assert_eq!(json["success"], true, "{route}");
            assert!(json[payload_key].is_array(), "{route}");
            assert!(!json[payload_key].as_array().unwrap().is_empty(), "{route}");
        }
    }

    #[tokio::test]
    async fn weather_envelope_is_flattened() {
        let response = test_app()
            .oneshot(Request::get("/api/mock/weather").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert!(json["current"]["temperature"].is_number());
        assert_eq!(json["alerts"].as_array().unwrap().len(), 2);
        assert_eq!(json["forecast"].as_array().unwrap().len(), 5);
        assert_eq!(json["location"]["city"], "Mumbai");
    }

    #[tokio::test]
    async fn valid_profile_is_echoed_with_location() {
        let response = test_app().oneshot(profile_request(VALID_PROFILE)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["location"], "Cuttack, Odisha");
        assert_eq!(json["name"], "Farmer");
        assert!(json["avatar"].is_null());
        assert!(json["id"].as_str().unwrap().starts_with("profile_"));
        assert!(json["languages"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn profile_ids_are_distinct() {
        let first = body_json(
            test_app().oneshot(profile_request(VALID_PROFILE)).await.unwrap(),
        )
        .await;
        let second = body_json(
            test_app().oneshot(profile_request(VALID_PROFILE)).await.unwrap(),
        )
        .await;

        assert_ne!(first["id"], second["id"]);
    }

    #[tokio::test]
    async fn missing_fields_are_enumerated_in_order() {
        let response = test_app()
            .oneshot(profile_request(r#"{"state": "Odisha"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(
            json["error"],
            "Missing required fields: district, farmSize, soilType, irrigation"
        );
    }

    #[tokio::test]
    async fn malformed_profile_body_maps_to_500() {
        let response = test_app()
            .oneshot(profile_request("{not valid json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Internal server error");
    }

    #[tokio::test]
    async fn pest_detection_requires_image_field() {
        let response = test_app().oneshot(multipart_request("notes")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "No image provided");
    }

    #[tokio::test]
    async fn pest_detection_returns_fixture_result() {
        let response = test_app().oneshot(multipart_request("image")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);

        let confidence = json["detection"]["confidence"].as_u64().unwrap();
        assert!(confidence <= 100);

        let severity = json["detection"]["severity"].as_str().unwrap();
        assert!(["low", "medium", "high"].contains(&severity));
        assert_eq!(json["metadata"]["imageProcessed"], true);
    }
}
