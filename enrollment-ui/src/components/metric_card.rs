//! Metric Card Component
//!
//! A labelled value with an optional delta line underneath.

use leptos::*;

use crate::state::global::MetricCardData;

/// Metric card component
#[component]
pub fn MetricCard(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: String,
    #[prop(optional_no_strip)]
    delta: Option<String>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition">
            <div class="text-gray-400 text-sm">{label}</div>
            <div class="text-3xl font-bold mt-2">{value}</div>
            {delta_line(delta.as_deref()).map(|d| view! {
                <div class="mt-2 text-sm text-green-400">{d}</div>
            })}
        </div>
    }
}

/// Row of cards, four across on wide screens
#[component]
pub fn MetricRow(
    #[prop(into)]
    cards: Signal<Vec<MetricCardData>>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <For
                each=move || cards.get()
                key=|card| card.label.clone()
                children=move |card| view! {
                    <MetricCard label=card.label value=card.value delta=card.delta />
                }
            />
        </div>
    }
}

/// Text under the value; blank deltas show nothing
pub fn delta_line(delta: Option<&str>) -> Option<String> {
    delta
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(|d| format!("↑ {}", d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_line() {
        let card = MetricCardData {
            label: "Total Records".to_string(),
            value: "1.5M".to_string(),
            delta: Some("+15K/day".to_string()),
        };
        assert_eq!(delta_line(card.delta.as_deref()).as_deref(), Some("↑ +15K/day"));
        assert_eq!(delta_line(Some("  ")), None);
        assert_eq!(delta_line(None), None);
    }
}
