//! About Page

use leptos::*;

use crate::api;
use crate::components::Loading;
use crate::pages::PageHeader;
use crate::state::global::GlobalState;

/// About page component
#[component]
pub fn About() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (data, set_data) = create_signal(None::<api::AboutResponse>);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_about().await {
                Ok(response) => set_data.set(Some(response)),
                Err(e) => state.show_error(&e),
            }
        });
    });

    view! {
        <div class="space-y-8">
            <PageHeader text="ℹ️ About This Project" />

            {move || match data.get() {
                None => view! { <Loading /> }.into_view(),
                Some(about) => {
                    let content = about.content;
                    view! {
                        <article class="bg-gray-800 rounded-xl p-6 space-y-4 leading-relaxed">
                            <h2 class="text-2xl font-semibold">{content.heading}</h2>
                            <p class="text-gray-300">{content.overview}</p>

                            <h3 class="text-lg font-semibold">"Features"</h3>
                            <ul class="list-disc list-inside text-gray-300 space-y-1">
                                {content.features.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}
                            </ul>

                            <h3 class="text-lg font-semibold">"Model Performance"</h3>
                            <ul class="list-disc list-inside text-gray-300 space-y-1">
                                {content.model_scores.into_iter().map(|score| view! {
                                    <li>{score.model} ": R² = " <span class="font-mono">{score.r_squared}</span></li>
                                }).collect_view()}
                            </ul>

                            <p><span class="font-semibold">"Built for: "</span>{content.built_for}</p>
                            <p><span class="font-semibold">"Status: "</span>{content.status}</p>
                        </article>
                    }.into_view()
                }
            }}
        </div>
    }
}
