//! Predictions Page
//!
//! Two age-band sliders and the outlier select. Every change re-requests
//! the estimate; only the newest response is shown.

use leptos::*;

use crate::api;
use crate::components::MetricCard;
use crate::pages::PageHeader;
use crate::state::global::{GlobalState, Prediction};

pub const SLIDER_MIN: u32 = 0;
pub const SLIDER_MAX: u32 = 1000;
pub const DEFAULT_CHILDREN: u32 = 50;
pub const DEFAULT_ADULTS: u32 = 100;
pub const OUTLIER_OPTIONS: [&str; 2] = ["No", "Yes"];

/// Predictions page component
#[component]
pub fn Predictions() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (children, set_children) = create_signal(DEFAULT_CHILDREN);
    let (adults, set_adults) = create_signal(DEFAULT_ADULTS);
    let (outlier, set_outlier) = create_signal(OUTLIER_OPTIONS[0].to_string());
    let (prediction, set_prediction) = create_signal(None::<Prediction>);
    let generation = store_value(0u64);

    create_effect(move |_| {
        let (c, a, zone) = (children.get(), adults.get(), outlier.get());
        let state = state.clone();

        generation.update_value(|g| *g += 1);
        let current = generation.get_value();

        spawn_local(async move {
            let result = api::predict(c, a, &zone).await;
            // The page may have been left while the request was in flight
            if !should_apply(generation.try_get_value(), current) {
                return;
            }
            match result {
                Ok(p) => {
                    let _ = set_prediction.try_set(Some(p));
                }
                Err(e) => state.show_error(&e),
            }
        });
    });

    view! {
        <div class="space-y-8">
            <PageHeader text="🎯 Enrollment Predictions" />

            <div class="grid md:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6 space-y-6">
                    <CountSlider
                        label="Children (5-17 years)"
                        value=children
                        set_value=set_children
                    />
                    <CountSlider
                        label="Adults (17+ years)"
                        value=adults
                        set_value=set_adults
                    />
                </section>

                <section class="bg-gray-800 rounded-xl p-6 space-y-6">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Is Outlier Zone?"</label>
                        <select
                            on:change=move |ev| set_outlier.set(event_target_value(&ev))
                            prop:value=move || outlier.get()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                   border border-gray-600 focus:border-blue-500 focus:outline-none"
                        >
                            {OUTLIER_OPTIONS.iter().map(|opt| view! {
                                <option value=*opt>{*opt}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    {move || prediction.get().map(|p| view! {
                        <MetricCard label="Predicted Enrollment" value=p.formatted_total />
                        <div class="bg-green-900/40 border border-green-700 text-green-200 rounded-lg px-4 py-3">
                            "✅ " {p.message}
                        </div>
                    })}
                </section>
            </div>
        </div>
    }
}

#[component]
fn CountSlider(
    label: &'static str,
    value: ReadSignal<u32>,
    set_value: WriteSignal<u32>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">
                {label} ": "
                <span class="text-white font-medium">{move || value.get()}</span>
            </label>

            <input
                type="range"
                min=SLIDER_MIN
                max=SLIDER_MAX
                step=1
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    if let Some(v) = parse_slider(&event_target_value(&ev)) {
                        set_value.set(v);
                    }
                }
                class="w-full accent-blue-500"
            />

            <div class="flex justify-between text-xs text-gray-500 mt-1">
                <span>{SLIDER_MIN}</span>
                <span>{SLIDER_MAX}</span>
            </div>
        </div>
    }
}

/// Whether the response to request `issued` is still the one to show.
/// `latest` is `None` once the page's reactive scope is gone.
fn should_apply(latest: Option<u64>, issued: u64) -> bool {
    latest == Some(issued)
}

/// Parse a slider value, clamping to the slider range
pub fn parse_slider(raw: &str) -> Option<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .map(|v| v.clamp(SLIDER_MIN, SLIDER_MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slider() {
        assert_eq!(parse_slider("250"), Some(250));
        assert_eq!(parse_slider("5000"), Some(SLIDER_MAX));
        assert_eq!(parse_slider("-3"), None);
        assert_eq!(parse_slider(""), None);
    }

    #[test]
    fn test_should_apply_only_latest_live_request() {
        assert!(should_apply(Some(3), 3));
        assert!(!should_apply(Some(4), 3));
        assert!(!should_apply(None, 3));
    }
}
