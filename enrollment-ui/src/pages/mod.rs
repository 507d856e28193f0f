//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod predictions;
pub mod analytics;
pub mod about;

pub use dashboard::Dashboard;
pub use predictions::Predictions;
pub use analytics::Analytics;
pub use about::About;

use leptos::*;

/// Page heading shared by every route
#[component]
pub fn PageHeader(
    #[prop(into)]
    text: MaybeSignal<String>,
) -> impl IntoView {
    view! {
        <h1 class="text-3xl font-bold">{move || text.get()}</h1>
    }
}
