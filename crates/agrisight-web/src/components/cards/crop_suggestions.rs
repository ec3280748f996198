//! Crop Suggestions Card

use leptos::prelude::*;

use agrisight_core::{CropSuggestion, WaterRequirement, fixtures};

use crate::api;

fn suitability_class(suitability: u8) -> &'static str {
    if suitability >= 90 {
        "badge badge-green"
    } else if suitability >= 80 {
        "badge badge-yellow"
    } else {
        "badge badge-orange"
    }
}

fn water_label(requirement: WaterRequirement) -> &'static str {
    match requirement {
        WaterRequirement::Low => "low water",
        WaterRequirement::Medium => "medium water",
        WaterRequirement::High => "high water",
    }
}

fn water_class(requirement: WaterRequirement) -> &'static str {
    match requirement {
        WaterRequirement::Low => "badge badge-green",
        WaterRequirement::Medium => "badge badge-yellow",
        WaterRequirement::High => "badge badge-red",
    }
}

#[component]
pub fn CropSuggestionsCard() -> impl IntoView {
    // Seed from the bundled fallback so the card never renders empty,
    // then refresh once in the background.
    let (suggestions, set_suggestions) = signal(fixtures::crop_suggestions_fallback());

    leptos::task::spawn_local(async move {
        match api::fetch_crop_suggestions().await {
            // try_set discards a response that lands after unmount
            Ok(fresh) => {
                let _ = set_suggestions.try_set(fresh);
            }
            Err(err) => leptos::logging::warn!("crop suggestions refresh failed: {err}"),
        }
    });

    view! {
        <div class="card" data-feature="crops">
            <div class="card-header">
                <span class="card-icon card-icon-green">"🌱"</span>
                <h3 class="card-title">"Crop Suggestions"</h3>
            </div>
            <div class="card-list">
                <For
                    each=move || suggestions.get()
                    key=|suggestion| suggestion.id.clone()
                    children=move |suggestion| view! { <SuggestionRow suggestion /> }
                />
            </div>
        </div>
    }
}

#[component]
fn SuggestionRow(suggestion: CropSuggestion) -> impl IntoView {
    view! {
        <div class="card-row">
            <div class="card-row-head">
                <span class="row-name">{suggestion.name.clone()}</span>
                <span class="row-sub">{suggestion.variety.clone()}</span>
                <span class=suitability_class(suggestion.suitability)>
                    {format!("{}% match", suggestion.suitability)}
                </span>
            </div>
            <div class="card-row-meta">
                <span>"📅 " {suggestion.planting_season.clone()}</span>
                <span>"📈 " {suggestion.expected_yield.clone()}</span>
                <span>{format!("₹{}/kg", suggestion.market_price)}</span>
                <span class=water_class(suggestion.water_requirement)>
                    {water_label(suggestion.water_requirement)}
                </span>
            </div>
            <div class="card-row-tags">
                {suggestion
                    .benefits
                    .iter()
                    .map(|benefit| view! { <span class="tag">{benefit.clone()}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}
