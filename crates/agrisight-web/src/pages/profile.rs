//! Profile Intake Page

use leptos::prelude::*;

use agrisight_core::ProfileSubmission;

use crate::api;
use crate::context::AppContext;

const STATES: [&str; 28] = [
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
];

const SOIL_TYPES: [&str; 8] = [
    "Alluvial Soil",
    "Black Soil",
    "Red Soil",
    "Laterite Soil",
    "Mountain Soil",
    "Desert Soil",
    "Saline Soil",
    "Peaty Soil",
];

const IRRIGATION_TYPES: [&str; 6] = [
    "Drip Irrigation",
    "Sprinkler Irrigation",
    "Flood Irrigation",
    "Furrow Irrigation",
    "Center Pivot",
    "Manual Watering",
];

const LANGUAGES: [&str; 11] = [
    "Hindi", "English", "Odia", "Telugu", "Tamil", "Bengali", "Marathi", "Gujarati", "Kannada",
    "Malayalam", "Punjabi",
];

const COMMON_CROPS: [&str; 24] = [
    "Rice",
    "Wheat",
    "Maize",
    "Sugarcane",
    "Cotton",
    "Soybean",
    "Groundnut",
    "Mustard",
    "Potato",
    "Onion",
    "Tomato",
    "Chili",
    "Turmeric",
    "Ginger",
    "Coconut",
    "Mango",
    "Banana",
    "Apple",
    "Grapes",
    "Pomegranate",
    "Papaya",
    "Guava",
    "Lemon",
    "Orange",
];

fn toggle(list: &mut Vec<String>, value: &str) {
    if let Some(index) = list.iter().position(|v| v == value) {
        list.remove(index);
    } else {
        list.push(value.to_string());
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = AppContext::use_context();

    let (name, set_name) = signal(String::new());
    let (state, set_state) = signal(String::new());
    let (district, set_district) = signal(String::new());
    let (farm_size, set_farm_size) = signal(String::new());
    let (soil_type, set_soil_type) = signal(String::new());
    let (irrigation, set_irrigation) = signal(String::new());
    let (languages, set_languages) = signal(Vec::<String>::new());
    let (crops, set_crops) = signal(Vec::<String>::new());
    let (saving, set_saving) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        set_saving.set(true);

        // Send the form as-is; the server enumerates whatever is missing.
        let submission = ProfileSubmission {
            name: Some(name.get()),
            avatar: None,
            state: Some(state.get()),
            district: Some(district.get()),
            farm_size: Some(farm_size.get()),
            soil_type: Some(soil_type.get()),
            irrigation: Some(irrigation.get()),
            languages: languages.get(),
            crops: crops.get(),
        };

        leptos::task::spawn_local(async move {
            match api::submit_profile(&submission).await {
                Ok(profile) => ctx.toasts.success(
                    "Profile Saved Successfully!",
                    format!(
                        "{} · {} · {} acres",
                        profile.name, profile.location, profile.farm_size
                    ),
                ),
                Err(err) => ctx.toasts.error("Profile save failed", err),
            }
            let _ = set_saving.try_set(false);
        });
    };

    view! {
        <div class="profile">
            <header class="profile-header">
                <h1>"Farmer Profile"</h1>
                <p class="profile-subtitle">"Tell us about your farm to personalise the dashboard"</p>
            </header>

            <form class="profile-form" on:submit=submit>
                <div class="field">
                    <label>"Name"</label>
                    <input
                        type="text"
                        placeholder="Your name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>

                <div class="field">
                    <label>"State *"</label>
                    <select
                        prop:value=move || state.get()
                        on:change=move |ev| set_state.set(event_target_value(&ev))
                    >
                        <option value="">"Select state"</option>
                        {STATES
                            .iter()
                            .map(|s| view! { <option value=*s>{*s}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="field">
                    <label>"District *"</label>
                    <input
                        type="text"
                        placeholder="Your district"
                        prop:value=move || district.get()
                        on:input=move |ev| set_district.set(event_target_value(&ev))
                    />
                </div>

                <div class="field">
                    <label>"Farm size (acres) *"</label>
                    <input
                        type="number"
                        min="0"
                        step="0.1"
                        placeholder="e.g. 2.5"
                        prop:value=move || farm_size.get()
                        on:input=move |ev| set_farm_size.set(event_target_value(&ev))
                    />
                </div>

                <div class="field">
                    <label>"Soil type *"</label>
                    <select
                        prop:value=move || soil_type.get()
                        on:change=move |ev| set_soil_type.set(event_target_value(&ev))
                    >
                        <option value="">"Select soil type"</option>
                        {SOIL_TYPES
                            .iter()
                            .map(|s| view! { <option value=*s>{*s}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="field">
                    <label>"Irrigation *"</label>
                    <select
                        prop:value=move || irrigation.get()
                        on:change=move |ev| set_irrigation.set(event_target_value(&ev))
                    >
                        <option value="">"Select irrigation method"</option>
                        {IRRIGATION_TYPES
                            .iter()
                            .map(|s| view! { <option value=*s>{*s}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="field">
                    <label>"Languages"</label>
                    <div class="chip-row">
                        {LANGUAGES
                            .iter()
                            .map(|language| {
                                let value = (*language).to_string();
                                let is_on = {
                                    let value = value.clone();
                                    move || languages.get().contains(&value)
                                };
                                view! {
                                    <button
                                        type="button"
                                        class="chip"
                                        class=("chip-selected", is_on)
                                        on:click=move |_| {
                                            set_languages.update(|list| toggle(list, language))
                                        }
                                    >
                                        {*language}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="field">
                    <label>"Crops you grow"</label>
                    <div class="chip-row">
                        {COMMON_CROPS
                            .iter()
                            .map(|crop| {
                                let value = (*crop).to_string();
                                let is_on = {
                                    let value = value.clone();
                                    move || crops.get().contains(&value)
                                };
                                view! {
                                    <button
                                        type="button"
                                        class="chip"
                                        class=("chip-selected", is_on)
                                        on:click=move |_| set_crops.update(|list| toggle(list, crop))
                                    >
                                        {*crop}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save Profile" }}
                </button>
            </form>
        </div>
    }
}
