//! Feature Modal
//!
//! Focus-trapped dialog: Tab wraps inside the modal's focusable set,
//! Escape closes, clicking the backdrop (not the content) closes, and
//! focus returns to whatever element opened it.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

const FOCUSABLE_SELECTOR: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

/// Where the trap should move focus, if the keypress would leave the
/// modal's focusable set. `None` means the browser default stays inside.
fn trap_target(active: Option<usize>, len: usize, shift: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match active {
        Some(0) if shift => Some(len - 1),
        Some(i) if !shift && i == len - 1 => Some(0),
        // Focus is outside the modal entirely: pull it back in
        None if shift => Some(len - 1),
        None => Some(0),
        _ => None,
    }
}

fn focusables(root: &web_sys::HtmlDivElement) -> Vec<web_sys::HtmlElement> {
    let mut items = Vec::new();
    if let Ok(list) = root.query_selector_all(FOCUSABLE_SELECTOR) {
        for index in 0..list.length() {
            if let Some(el) = list
                .get(index)
                .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
            {
                items.push(el);
            }
        }
    }
    items
}

fn active_element() -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element())
}

#[component]
pub fn Modal(
    /// Visibility; closing writes `false` back
    open: RwSignal<bool>,
    #[prop(into)] title: Signal<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let content_ref = NodeRef::<leptos::html::Div>::new();

    // Element focused before the modal opened, restored on close
    let previous_focus = StoredValue::new_local(None::<web_sys::HtmlElement>);

    Effect::new(move |_| {
        if open.get() {
            previous_focus.set_value(
                active_element().and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()),
            );
            if let Some(root) = content_ref.get() {
                if let Some(first) = focusables(&root).into_iter().next() {
                    let _ = first.focus();
                }
            }
        } else if let Some(el) = previous_focus.get_value() {
            let _ = el.focus();
        }
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            open.set(false);
            return;
        }
        if ev.key() != "Tab" {
            return;
        }
        let Some(root) = content_ref.get() else {
            return;
        };

        let items = focusables(&root);
        let active = active_element();
        let index = active.as_ref().and_then(|el| {
            items
                .iter()
                .position(|item| AsRef::<web_sys::Element>::as_ref(item) == el)
        });

        if let Some(target) = trap_target(index, items.len(), ev.shift_key()) {
            ev.prevent_default();
            let _ = items[target].focus();
        }
    };

    let on_backdrop = move |ev: web_sys::MouseEvent| {
        let hit_backdrop = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .is_some_and(|el| el.class_list().contains("modal-backdrop"));
        if hit_backdrop {
            open.set(false);
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=on_backdrop on:keydown=on_keydown>
                <div
                    class="modal-content"
                    node_ref=content_ref
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="modal-title"
                >
                    <div class="modal-header">
                        <h2 id="modal-title" class="modal-title">
                            {move || title.get()}
                        </h2>
                        <button
                            class="modal-close"
                            aria-label="Close modal"
                            on:click=move |_| open.set(false)
                        >
                            "×"
                        </button>
                    </div>
                    <div class="modal-body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::trap_target;

    #[test]
    fn test_tab_wraps_from_last_to_first() {
        assert_eq!(trap_target(Some(2), 3, false), Some(0));
        assert_eq!(trap_target(Some(0), 3, false), None);
        assert_eq!(trap_target(Some(1), 3, false), None);
    }

    #[test]
    fn test_shift_tab_wraps_from_first_to_last() {
        assert_eq!(trap_target(Some(0), 3, true), Some(2));
        assert_eq!(trap_target(Some(2), 3, true), None);
    }

    #[test]
    fn test_focus_outside_is_pulled_back_in() {
        assert_eq!(trap_target(None, 3, false), Some(0));
        assert_eq!(trap_target(None, 3, true), Some(2));
    }

    #[test]
    fn test_empty_focusable_set_is_left_alone() {
        assert_eq!(trap_target(None, 0, false), None);
        assert_eq!(trap_target(Some(0), 0, true), None);
    }

    #[test]
    fn test_single_element_wraps_onto_itself() {
        assert_eq!(trap_target(Some(0), 1, false), Some(0));
        assert_eq!(trap_target(Some(0), 1, true), Some(0));
    }
}
