//! Analytics Page
//!
//! Monthly trend line chart and data quality cards.

use leptos::*;

use crate::api;
use crate::components::{CardSkeleton, ChartSkeleton, LineChart, MetricRow};
use crate::pages::PageHeader;
use crate::state::global::GlobalState;

/// Analytics page component
#[component]
pub fn Analytics() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (data, set_data) = create_signal(None::<api::AnalyticsResponse>);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);
            match api::fetch_analytics().await {
                Ok(response) => set_data.set(Some(response)),
                Err(e) => state.show_error(&e),
            }
            state.loading.set(false);
        });
    });

    let points = Signal::derive(move || data.get().map(|d| d.trend).unwrap_or_default());
    let color = Signal::derive(move || data.get().map(|d| d.color).unwrap_or_default());
    let quality = Signal::derive(move || data.get().map(|d| d.quality).unwrap_or_default());

    view! {
        <div class="space-y-8">
            <PageHeader text="📈 Advanced Analytics" />

            {move || match data.get() {
                None => view! {
                    <ChartSkeleton />
                    <CardSkeleton />
                }.into_view(),
                Some(d) => view! {
                    <section class="bg-gray-800 rounded-xl p-6">
                        <h2 class="text-xl font-semibold mb-4">{d.trend_title}</h2>
                        <LineChart points=points title=d.caption color=color />
                    </section>

                    <section>
                        <h2 class="text-xl font-semibold mb-4">{d.quality_title}</h2>
                        <MetricRow cards=quality />
                    </section>
                }.into_view(),
            }}
        </div>
    }
}
