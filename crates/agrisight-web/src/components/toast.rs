//! Toast Notifications
//!
//! Queued, auto-dismissing notifications. Entries drop out after their
//! configured duration or on explicit dismissal; dismissing an id that is
//! already gone is a no-op.

use std::time::Duration;

use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;

use crate::context::AppContext;

/// Default lifetime of a toast entry, in milliseconds
pub const DEFAULT_TOAST_MS: u64 = 5000;

/// Toast classification, drives the card styling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Info => "toast-info",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✔",
            ToastKind::Error => "✖",
            ToastKind::Info => "ℹ",
        }
    }
}

/// One queued notification
#[derive(Clone, Debug)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: Option<String>,
    pub duration_ms: u64,
}

fn remove_entry(entries: &mut Vec<Toast>, id: u64) {
    entries.retain(|toast| toast.id != id);
}

/// Handle to the toast queue; cheap to copy into closures
#[derive(Clone, Copy)]
pub struct ToastStore {
    entries: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastStore {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn entries(&self) -> RwSignal<Vec<Toast>> {
        self.entries
    }

    /// Queue a toast with the default lifetime and arm its auto-dismiss
    /// timer.
    pub fn push(&self, kind: ToastKind, title: impl Into<String>, message: Option<String>) -> u64 {
        self.push_with_duration(kind, title, message, DEFAULT_TOAST_MS)
    }

    pub fn push_with_duration(
        &self,
        kind: ToastKind,
        title: impl Into<String>,
        message: Option<String>,
        duration_ms: u64,
    ) -> u64 {
        let id = self.next_id.with_value(|id| *id);
        self.next_id.update_value(|id| *id += 1);

        let toast = Toast {
            id,
            kind,
            title: title.into(),
            message,
            duration_ms,
        };
        self.entries.update(|entries| entries.push(toast));

        let store = *self;
        set_timeout(move || store.dismiss(id), Duration::from_millis(duration_ms));

        id
    }

    /// Remove a toast by id. Idempotent: the auto-dismiss timer and the
    /// close button may both fire for the same entry.
    pub fn dismiss(&self, id: u64) {
        let _ = self.entries.try_update(|entries| remove_entry(entries, id));
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(ToastKind::Success, title, Some(message.into()));
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(ToastKind::Error, title, Some(message.into()));
    }

    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(ToastKind::Info, title, Some(message.into()));
    }
}

/// Renders the active toast queue in a fixed stack
#[component]
pub fn ToastHost() -> impl IntoView {
    let store = AppContext::use_context().toasts;

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || store.entries().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.kind.class())>
                            <span class="toast-icon">{toast.kind.icon()}</span>
                            <div class="toast-body">
                                <h4 class="toast-title">{toast.title.clone()}</h4>
                                {toast
                                    .message
                                    .clone()
                                    .map(|message| view! { <p class="toast-message">{message}</p> })}
                            </div>
                            <button
                                class="toast-close"
                                aria-label="Dismiss"
                                on:click=move |_| store.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64) -> Toast {
        Toast {
            id,
            kind: ToastKind::Info,
            title: "t".into(),
            message: None,
            duration_ms: DEFAULT_TOAST_MS,
        }
    }

    #[test]
    fn test_removal_is_idempotent() {
        let mut entries = vec![toast(0), toast(1)];

        remove_entry(&mut entries, 0);
        assert_eq!(entries.len(), 1);

        // Closing twice does not error or touch other entries
        remove_entry(&mut entries, 0);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, 1);
    }
}
