//! Application Context
//!
//! One immutable context per session, provided at app start. The locale
//! is resolved once from the browser and never changes afterwards; the
//! toast queue handle rides along so any component can notify.

use leptos::prelude::*;

use crate::components::ToastStore;

/// Per-session application context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// BCP-47 tag resolved at startup, fixed for the session
    pub locale: StoredValue<String>,

    /// Shared toast queue
    pub toasts: ToastStore,
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContext {
    pub fn new() -> Self {
        let locale = web_sys::window()
            .map(|w| w.navigator().language().unwrap_or_default())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| "en-IN".into());

        Self {
            locale: StoredValue::new(locale),
            toasts: ToastStore::new(),
        }
    }

    /// Fetch the context provided by [`crate::App`].
    pub fn use_context() -> Self {
        expect_context::<Self>()
    }
}
