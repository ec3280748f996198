//! Weather Alerts Card

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use agrisight_core::{AlertKind, WeatherAlert, fixtures};

use crate::api;

fn alert_class(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Warning => "alert alert-warning",
        AlertKind::Info => "alert alert-info",
        AlertKind::Danger => "alert alert-danger",
    }
}

#[component]
pub fn WeatherAlertsCard() -> impl IntoView {
    let (current, set_current) = signal(fixtures::weather_current());
    let (alerts, set_alerts) = signal(fixtures::weather_alerts());
    let (forecast, set_forecast) = signal(fixtures::weather_forecast());
    let (refreshed_at, set_refreshed_at) = signal(None::<DateTime<Utc>>);

    leptos::task::spawn_local(async move {
        match api::fetch_weather().await {
            Ok(snapshot) => {
                let _ = set_current.try_set(snapshot.current);
                let _ = set_alerts.try_set(snapshot.alerts);
                let _ = set_forecast.try_set(snapshot.forecast);
                let _ = set_refreshed_at.try_set(Some(snapshot.last_updated));
            }
            Err(err) => leptos::logging::warn!("weather refresh failed: {err}"),
        }
    });

    view! {
        <div class="card" data-feature="weather">
            <div class="card-header">
                <span class="card-icon card-icon-blue">"⛅"</span>
                <h3 class="card-title">"Weather Alerts"</h3>
                {move || {
                    refreshed_at
                        .get()
                        .map(|at| {
                            view! {
                                <span class="row-sub">
                                    {format!("updated {}", at.format("%H:%M"))}
                                </span>
                            }
                        })
                }}
            </div>

            <div class="weather-current">
                <span class="weather-temp">{move || format!("{}°C", current.get().temperature)}</span>
                <span class="weather-condition">{move || current.get().condition}</span>
                <div class="weather-stats">
                    <span>{move || format!("💧 {}%", current.get().humidity)}</span>
                    <span>{move || format!("💨 {} km/h", current.get().wind_speed)}</span>
                    <span>{move || format!("feels like {}°C", current.get().feels_like)}</span>
                </div>
            </div>

            <div class="weather-alerts">
                <For
                    each=move || alerts.get()
                    key=|alert| alert.id.clone()
                    children=move |alert| view! { <AlertRow alert /> }
                />
            </div>

            <div class="weather-forecast">
                <For
                    each=move || forecast.get()
                    key=|day| day.day.clone()
                    children=move |day| {
                        view! {
                            <div class="forecast-day">
                                <span class="forecast-label">{day.day.clone()}</span>
                                <span class="forecast-temps">
                                    {format!("{}° / {}°", day.high, day.low)}
                                </span>
                                <span class="forecast-condition">{day.condition.clone()}</span>
                                <span class="forecast-rain">
                                    {format!("☔ {}%", day.precipitation)}
                                </span>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn AlertRow(alert: WeatherAlert) -> impl IntoView {
    view! {
        <div class=alert_class(alert.kind)>
            <div class="alert-head">
                <span class="alert-title">{alert.title.clone()}</span>
                <span class="alert-time">{alert.time.clone()}</span>
            </div>
            <p class="alert-description">{alert.description.clone()}</p>
        </div>
    }
}
