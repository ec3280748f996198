//! Pest Detection Card
//!
//! User-triggered, unlike the other cards: upload a plant photo, show a
//! local preview while the analysis request is in flight, then render the
//! detection result. Any upload failure degrades to the deterministic
//! fallback detection rather than an error state.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use agrisight_core::{PestDetection, Severity, fixtures, validate_plant_image};

use crate::api;
use crate::context::AppContext;

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "LOW",
        Severity::Medium => "MEDIUM",
        Severity::High => "HIGH",
    }
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "badge badge-green",
        Severity::Medium => "badge badge-yellow",
        Severity::High => "badge badge-red",
    }
}

async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "could not read file".to_string())?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

fn revoke_preview(url: &Option<String>) {
    if let Some(url) = url {
        web_sys::Url::revoke_object_url(url).ok();
    }
}

#[component]
pub fn PestDetectionCard() -> impl IntoView {
    let ctx = AppContext::use_context();

    let (preview_url, set_preview_url) = signal(None::<String>);
    let (analyzing, set_analyzing) = signal(false);
    let (result, set_result) = signal(None::<PestDetection>);

    on_cleanup(move || {
        if let Some(url) = preview_url.try_get_untracked() {
            revoke_preview(&url);
        }
    });

    let on_select = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Allow picking the same file again after a reset
        input.set_value("");

        let content_type = file.type_();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let size = file.size() as usize;
        if let Err(err) = validate_plant_image(&content_type, size) {
            ctx.toasts.error("Upload rejected", err.to_string());
            return;
        }

        if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
            set_preview_url.set(Some(url));
        }
        set_result.set(None);
        set_analyzing.set(true);

        let file_name = file.name();
        leptos::task::spawn_local(async move {
            let detection = match read_file_bytes(&file).await {
                Ok(bytes) => match api::detect_pest(file_name, content_type, bytes).await {
                    Ok(detection) => detection,
                    Err(err) => {
                        leptos::logging::warn!("pest detection failed: {err}");
                        fixtures::pest_detection_fallback()
                    }
                },
                Err(err) => {
                    leptos::logging::warn!("pest detection failed: {err}");
                    fixtures::pest_detection_fallback()
                }
            };

            // try_set discards results that land after unmount
            let _ = set_result.try_set(Some(detection));
            let _ = set_analyzing.try_set(false);
        });
    };

    let reset = move |_| {
        revoke_preview(&preview_url.get_untracked());
        set_preview_url.set(None);
        set_result.set(None);
        set_analyzing.set(false);
    };

    view! {
        <div class="card" data-feature="pests">
            <div class="card-header">
                <span class="card-icon card-icon-orange">"📷"</span>
                <h3 class="card-title">"Pest & Disease Detection"</h3>
            </div>

            <Show
                when=move || preview_url.get().is_some()
                fallback=move || {
                    view! {
                        <label class="upload-zone">
                            <input type="file" accept="image/*" on:change=on_select />
                            <p class="upload-title">"Upload plant photo"</p>
                            <p class="upload-hint">"Click to select (JPG, PNG, WebP)"</p>
                            <p class="upload-limit">"Max file size: 5MB"</p>
                        </label>
                    }
                }
            >
                <div class="detection">
                    <div class="detection-preview">
                        <img
                            src=move || preview_url.get().unwrap_or_default()
                            alt="Uploaded plant"
                        />
                        <Show when=move || analyzing.get()>
                            <div class="detection-overlay">
                                <p>"Analyzing..."</p>
                            </div>
                        </Show>
                    </div>

                    {move || {
                        result
                            .get()
                            .map(|detection| {
                                view! {
                                    <div class="detection-result">
                                        <div class="detection-head">
                                            <h4>"Detection Result"</h4>
                                            <span class=severity_class(
                                                detection.severity,
                                            )>{severity_label(detection.severity)}</span>
                                        </div>
                                        <div class="detection-summary">
                                            <span class="detection-pest">{detection.pest.clone()}</span>
                                            <span class="detection-confidence">
                                                {format!("{}% confidence", detection.confidence)}
                                            </span>
                                        </div>
                                        <ul class="detection-recommendations">
                                            {detection
                                                .recommendations
                                                .iter()
                                                .map(|rec| view! { <li>{rec.clone()}</li> })
                                                .collect_view()}
                                        </ul>
                                        {(!detection.alternative_pests.is_empty())
                                            .then(|| {
                                                view! {
                                                    <div class="detection-alternatives">
                                                        <span class="row-sub">"Also possible: "</span>
                                                        {detection
                                                            .alternative_pests
                                                            .iter()
                                                            .map(|pest| {
                                                                view! {
                                                                    <span class="tag">
                                                                        {format!("{} ({}%)", pest.name, pest.confidence)}
                                                                    </span>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </div>
                                                }
                                            })}
                                        <button class="btn btn-secondary" on:click=reset>
                                            "Analyze Another Image"
                                        </button>
                                    </div>
                                }
                            })
                    }}
                </div>
            </Show>
        </div>
    }
}
