//! Fertilizer Recommendations Card

use leptos::prelude::*;

use agrisight_core::{Availability, FertilizerKind, FertilizerRecommendation, fixtures};

use crate::api;

fn kind_label(kind: FertilizerKind) -> &'static str {
    match kind {
        FertilizerKind::Organic => "Organic",
        FertilizerKind::Inorganic => "Inorganic",
        FertilizerKind::Bio => "Bio",
    }
}

fn kind_class(kind: FertilizerKind) -> &'static str {
    match kind {
        FertilizerKind::Organic => "badge badge-green",
        FertilizerKind::Inorganic => "badge badge-blue",
        FertilizerKind::Bio => "badge badge-purple",
    }
}

fn availability_label(availability: Availability) -> &'static str {
    match availability {
        Availability::High => "widely available",
        Availability::Medium => "limited stock",
        Availability::Low => "scarce",
    }
}

#[component]
pub fn FertilizerRecommendationsCard() -> impl IntoView {
    let (recommendations, set_recommendations) =
        signal(fixtures::fertilizer_recommendations_fallback());

    leptos::task::spawn_local(async move {
        match api::fetch_fertilizer_recommendations().await {
            Ok(fresh) => {
                let _ = set_recommendations.try_set(fresh);
            }
            Err(err) => leptos::logging::warn!("fertilizer refresh failed: {err}"),
        }
    });

    view! {
        <div class="card" data-feature="fertilizer">
            <div class="card-header">
                <span class="card-icon card-icon-teal">"🧪"</span>
                <h3 class="card-title">"Fertilizer Recommendations"</h3>
            </div>
            <div class="card-list">
                <For
                    each=move || recommendations.get()
                    key=|rec| rec.id.clone()
                    children=move |rec| view! { <RecommendationRow rec /> }
                />
            </div>
        </div>
    }
}

#[component]
fn RecommendationRow(rec: FertilizerRecommendation) -> impl IntoView {
    view! {
        <div class="card-row">
            <div class="card-row-head">
                <span class="row-name">{rec.name.clone()}</span>
                <span class=kind_class(rec.kind)>{kind_label(rec.kind)}</span>
                <span class="row-price">{format!("₹{}/kg", rec.price)}</span>
            </div>
            <div class="card-row-meta">
                <span>"🕐 " {rec.application_time.clone()}</span>
                <span>"⚖ " {rec.quantity.clone()}</span>
                <span>"🔁 " {rec.frequency.clone()}</span>
                <span class="row-sub">{availability_label(rec.availability)}</span>
            </div>
            <p class="row-detail">{rec.composition.clone()}</p>
            <div class="card-row-tags">
                {rec.benefits
                    .iter()
                    .map(|benefit| view! { <span class="tag">{benefit.clone()}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}
