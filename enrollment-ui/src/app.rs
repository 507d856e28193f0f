//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{Sidebar, Toast};
use crate::pages::{About, Analytics, Dashboard, Predictions};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Titles and page list; built-in defaults stay if this fails
    let app_info = state.app_info;
    spawn_local(async move {
        match api::fetch_app_info().await {
            Ok(info) => {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    document.set_title(&info.page_title);
                }
                app_info.set(Some(info));
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("Using built-in app info: {}", e).into());
            }
        }
    });

    let title_state = state.clone();
    let footer_state = state.clone();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <header class="bg-gray-800 border-b border-gray-700 px-6 py-4">
                    <span class="text-2xl font-bold">
                        {move || title_state.app_info_or_default().title}
                    </span>
                </header>

                <div class="flex-1 flex flex-col md:flex-row">
                    <Sidebar />

                    <main class="flex-1 px-6 py-8 pb-24">
                        <Routes>
                            <Route path="/" view=Dashboard />
                            <Route path="/predictions" view=Predictions />
                            <Route path="/analytics" view=Analytics />
                            <Route path="/about" view=About />
                            <Route path="/*any" view=NotFound />
                        </Routes>
                    </main>
                </div>

                <Footer text=Signal::derive(move || footer_state.app_info_or_default().footer) />

                <Toast />
            </div>
        </Router>
    }
}

/// Footer with the attribution line and a loading indicator
#[component]
fn Footer(text: Signal<String>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="flex items-center justify-between text-sm text-gray-400">
                <span>{move || text.get()}</span>

                {move || {
                    if state.loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-blue-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"Pick a page from the sidebar."</p>
            <A
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
