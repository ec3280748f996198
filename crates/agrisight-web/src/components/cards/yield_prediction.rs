//! Yield Prediction Card

use leptos::prelude::*;

use agrisight_core::fixtures;

use crate::api;

#[component]
pub fn YieldPredictionCard() -> impl IntoView {
    let (points, set_points) = signal(fixtures::yield_predictions());

    leptos::task::spawn_local(async move {
        match api::fetch_yield_prediction().await {
            Ok(fresh) => {
                let _ = set_points.try_set(fresh);
            }
            Err(err) => leptos::logging::warn!("yield prediction refresh failed: {err}"),
        }
    });

    // Scale bars against the largest predicted value in view
    let max_predicted = move || points.get().iter().map(|p| p.predicted).max().unwrap_or(1);

    view! {
        <div class="card" data-feature="yield">
            <div class="card-header">
                <span class="card-icon card-icon-lime">"🌾"</span>
                <h3 class="card-title">"Yield Prediction"</h3>
            </div>
            <div class="yield-chart">
                <For
                    each=move || points.get()
                    key=|point| point.month.clone()
                    children=move |point| {
                        let width = move || {
                            let max = max_predicted().max(1);
                            point.predicted * 100 / max
                        };
                        view! {
                            <div class="yield-row">
                                <span class="yield-month">{point.month.clone()}</span>
                                <div class="yield-bar-track">
                                    <div
                                        class="yield-bar"
                                        style:width=move || format!("{}%", width())
                                    ></div>
                                </div>
                                <span class="yield-values">
                                    {format!("{} predicted · {} actual", point.predicted, point.actual)}
                                </span>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
