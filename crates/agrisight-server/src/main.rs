//! AgriSight HTTP Server
//!
//! Axum-based server exposing the mock advisory endpoints, the profile
//! intake endpoint, and the static WASM frontend.

mod handlers;
mod state;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agrisight_core::{AdvisoryProvider, FixtureAdvisor};

use crate::handlers::{
    crop_suggestions, detect_pest, fertilizer_recommendations, health_check, market_prices,
    save_profile, weather, yield_prediction,
};
use crate::state::AppState;

/// Build the application router over the given state.
fn app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health & info
        .route("/health", get(health_check))
        // Mock advisory endpoints
        .route("/api/mock/crop-suggestions", get(crop_suggestions))
        .route(
            "/api/mock/fertilizer-recommendations",
            get(fertilizer_recommendations),
        )
        .route("/api/mock/market-prices", get(market_prices))
        .route("/api/mock/weather", get(weather))
        .route("/api/mock/yield-prediction", get(yield_prediction))
        .route("/api/mock/pest-detection", post(detect_pest))
        // Profile intake
        .route("/api/profile", post(save_profile))
        // Static files (WASM frontend)
        .fallback_service(tower_http::services::ServeDir::new("static"))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Initialize the advisory provider behind the mock endpoints
    let advisor: Arc<dyn AdvisoryProvider> = Arc::new(FixtureAdvisor::new());

    if advisor.health_check().await {
        tracing::info!("✓ Advisory provider ready: {}", advisor.name());
    } else {
        tracing::warn!("⚠ Advisory provider unavailable - endpoints will fail");
    }

    let state = AppState { advisor };
    let app = app(state);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🌾 AgriSight server running on http://{}", addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                               - Health check");
    tracing::info!("  GET  /api/mock/crop-suggestions            - Crop suggestions");
    tracing::info!("  GET  /api/mock/fertilizer-recommendations  - Fertilizer recommendations");
    tracing::info!("  GET  /api/mock/market-prices               - Market prices");
    tracing::info!("  GET  /api/mock/weather                     - Weather & alerts");
    tracing::info!("  GET  /api/mock/yield-prediction            - Yield prediction");
    tracing::info!("  POST /api/mock/pest-detection              - Pest detection upload");
    tracing::info!("  POST /api/profile                          - Profile intake");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
