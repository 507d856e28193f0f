//! Dashboard Page
//!
//! KPI cards and the top states bar chart.

use leptos::*;

use crate::api;
use crate::components::{BarChart, CardSkeleton, ChartSkeleton, MetricRow};
use crate::pages::PageHeader;
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (data, set_data) = create_signal(None::<api::DashboardResponse>);

    // Fetch on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);
            match api::fetch_dashboard().await {
                Ok(response) => set_data.set(Some(response)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch dashboard: {}", e).into());
                    state.show_error(&e);
                }
            }
            state.loading.set(false);
        });
    });

    let header = Signal::derive(move || {
        data.get()
            .map(|d| d.header)
            .unwrap_or_else(|| "📊 Enrollment Dashboard".to_string())
    });
    let kpis = Signal::derive(move || data.get().map(|d| d.kpis).unwrap_or_default());
    let rows = Signal::derive(move || data.get().map(|d| d.top_states).unwrap_or_default());

    view! {
        <div class="space-y-8">
            <PageHeader text=header />

            {move || match data.get() {
                None => view! {
                    <CardSkeleton />
                    <ChartSkeleton />
                }.into_view(),
                Some(d) => view! {
                    <section>
                        <MetricRow cards=kpis />
                    </section>

                    <section class="bg-gray-800 rounded-xl p-6">
                        <h2 class="text-xl font-semibold mb-4">{d.chart_title}</h2>
                        <BarChart rows=rows x_label=d.x_label />
                    </section>
                }.into_view(),
            }}
        </div>
    }
}
