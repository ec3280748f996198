//! Market Prices Card

use leptos::prelude::*;

use agrisight_core::{MarketPrice, fixtures};

use crate::api;

fn change_summary(price: &MarketPrice) -> (String, &'static str) {
    if price.is_rising() {
        (
            format!("▲ +{} ({}%)", price.change, price.change_percent),
            "price-change price-up",
        )
    } else {
        (
            format!("▼ {} ({}%)", price.change, price.change_percent),
            "price-change price-down",
        )
    }
}

#[component]
pub fn MarketPricesCard() -> impl IntoView {
    let (prices, set_prices) = signal(fixtures::market_prices_fallback());
    let (selected, set_selected) = signal(String::from("1"));

    leptos::task::spawn_local(async move {
        match api::fetch_market_prices().await {
            Ok(fresh) => {
                let _ = set_prices.try_set(fresh);
            }
            Err(err) => leptos::logging::warn!("market prices refresh failed: {err}"),
        }
    });

    view! {
        <div class="card" data-feature="market">
            <div class="card-header">
                <span class="card-icon card-icon-amber">"📊"</span>
                <h3 class="card-title">"Market Prices"</h3>
            </div>
            <div class="card-list">
                <For
                    each=move || prices.get()
                    key=|price| price.id.clone()
                    children=move |price| {
                        let id = price.id.clone();
                        let row_id = id.clone();
                        let (change, change_class) = change_summary(&price);
                        view! {
                            <div
                                class="card-row card-row-clickable"
                                class=("card-row-selected", move || selected.get() == row_id)
                                on:click=move |_| set_selected.set(id.clone())
                            >
                                <div class="card-row-head">
                                    <span class="row-name">{price.crop.clone()}</span>
                                    <span class="row-sub">{price.market.clone()}</span>
                                    <span class="row-price">
                                        {format!("₹{}/{}", price.current_price, price.unit)}
                                    </span>
                                </div>
                                <div class="card-row-meta">
                                    <span class=change_class>{change}</span>
                                    <span class="row-sub">{price.last_updated.clone()}</span>
                                    <span class="row-sub">
                                        {format!("demand: {}", price.market_details.demand)}
                                    </span>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
            {move || {
                prices
                    .get()
                    .into_iter()
                    .find(|price| price.id == selected.get())
                    .map(|price| {
                        view! {
                            <div class="trend-panel">
                                <h4 class="trend-title">
                                    {format!("{}: six month trend", price.crop)}
                                </h4>
                                <div class="trend-points">
                                    {price
                                        .trend
                                        .iter()
                                        .map(|point| {
                                            view! {
                                                <span class="trend-point">
                                                    <span class="trend-date">{point.date.clone()}</span>
                                                    <span class="trend-price">
                                                        {format!("₹{}", point.price)}
                                                    </span>
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
