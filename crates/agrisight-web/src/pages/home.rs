//! Home Page

use leptos::prelude::*;

use crate::components::Modal;

/// (dashboard slug, title, blurb) per landing feature
const FEATURES: [(&str, &str, &str); 6] = [
    (
        "yield",
        "Yield Prediction",
        "Projected harvests from your field history and local growing conditions.",
    ),
    (
        "pests",
        "Pest Detection",
        "Upload a plant photo and get an instant identification with treatment steps.",
    ),
    (
        "weather",
        "Weather Alerts",
        "Hyperlocal alerts and a five-day outlook so you can plan irrigation and harvests.",
    ),
    (
        "crops",
        "Crop Suggestions",
        "Crops matched to your soil, season, and nearby market demand.",
    ),
    (
        "fertilizer",
        "Fertilizer Recommendations",
        "The right inputs at the right dose and time, organic options included.",
    ),
    (
        "market",
        "Market Prices",
        "Live mandi prices with six-month trends for the crops you grow.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let modal_open = RwSignal::new(false);
    let (selected, set_selected) = signal(0usize);

    view! {
        <div class="home">
            <header class="hero">
                <h1>"AgriSight"</h1>
                <p class="tagline">"Smart farming insights for every field"</p>
                <div class="cta">
                    <a href="/dashboard" class="btn btn-primary">"Open Dashboard"</a>
                    <a href="/profile" class="btn">"Set Up Profile"</a>
                </div>
            </header>

            <section class="features">
                {FEATURES
                    .iter()
                    .enumerate()
                    .map(|(index, (slug, title, blurb))| {
                        view! {
                            <div class="feature">
                                <h3>{*title}</h3>
                                <p>{*blurb}</p>
                                <div class="feature-actions">
                                    <a
                                        href=format!("/dashboard?feature={slug}")
                                        class="btn btn-primary"
                                    >
                                        "View"
                                    </a>
                                    <button
                                        class="btn"
                                        on:click=move |_| {
                                            set_selected.set(index);
                                            modal_open.set(true);
                                        }
                                    >
                                        "Learn more"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <Modal
                open=modal_open
                title=Signal::derive(move || FEATURES[selected.get()].1.to_string())
            >
                {move || {
                    let (slug, _, blurb) = FEATURES[selected.get()];
                    view! {
                        <p class="modal-text">{blurb}</p>
                        <a href=format!("/dashboard?feature={slug}") class="btn btn-primary">
                            "Open in dashboard"
                        </a>
                    }
                }}
            </Modal>
        </div>
    }
}
