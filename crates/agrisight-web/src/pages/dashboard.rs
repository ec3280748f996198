//! Dashboard Page

use std::time::Duration;

use leptos::leptos_dom::helpers::set_timeout_with_handle;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::cards::{
    CropSuggestionsCard, FertilizerRecommendationsCard, MarketPricesCard, PestDetectionCard,
    WeatherAlertsCard, YieldPredictionCard,
};

/// Delay before the deep-link scroll fires, so the grid has rendered.
const SCROLL_DELAY: Duration = Duration::from_millis(300);

fn scroll_to_feature(slug: &str) {
    let selector = format!("[data-feature=\"{slug}\"]");
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(&selector).ok().flatten())
    {
        element.scroll_into_view();
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    // Deep link from the landing page: /dashboard?feature=<slug>.
    // Read once at mount; the timer is cancelled on teardown.
    let query = use_query_map();
    if let Some(slug) = query.with_untracked(|q| q.get("feature")) {
        if let Ok(handle) =
            set_timeout_with_handle(move || scroll_to_feature(&slug), SCROLL_DELAY)
        {
            on_cleanup(move || handle.clear());
        }
    }

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1 class="dashboard-title">"Farm Dashboard"</h1>
                <p class="dashboard-subtitle">
                    "Live insights for your fields, refreshed in the background"
                </p>
            </header>
            <div class="dashboard-grid">
                <YieldPredictionCard />
                <PestDetectionCard />
                <WeatherAlertsCard />
                <CropSuggestionsCard />
                <FertilizerRecommendationsCard />
                <MarketPricesCard />
            </div>
        </div>
    }
}
