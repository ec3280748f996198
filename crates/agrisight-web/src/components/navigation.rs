//! Top Navigation

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn Navigation() -> impl IntoView {
    let ctx = AppContext::use_context();

    view! {
        <nav class="nav">
            <a href="/" class="nav-brand">
                "🌾 AgriSight"
            </a>
            <div class="nav-links">
                <a href="/">"Home"</a>
                <a href="/dashboard">"Dashboard"</a>
                <a href="/profile">"My Profile"</a>
            </div>
            <span class="nav-locale">{ctx.locale.get_value()}</span>
        </nav>
    }
}
