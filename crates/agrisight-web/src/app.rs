//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::components::{Navigation, ToastHost};
use crate::context::AppContext;
use crate::pages::{DashboardPage, HomePage, ProfilePage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // One immutable context per session: locale and the toast queue live
    // here instead of in module-level singletons.
    provide_context(AppContext::new());

    view! {
        <Router>
            <Navigation />
            <ToastHost />
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/dashboard") view=DashboardPage />
                    <Route path=path!("/profile") view=ProfilePage />
                </Routes>
            </main>
        </Router>
    }
}
