//! Toast Notification Component
//!
//! API failures, shown bottom-right. Messages clear themselves after a
//! timeout, or on click.

use leptos::*;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let error = state.error;

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            {move || error.get().map(|msg| view! {
                <ToastMessage message=msg on_dismiss=move || error.set(None) />
            })}
        </div>
    }
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    on_dismiss: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <div
            class="flex items-center space-x-3 bg-red-600 text-white px-4 py-3 rounded-lg shadow-lg \
                   cursor-pointer animate-slide-in"
            on:click=move |_| on_dismiss()
        >
            <span class="text-lg">"✕"</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}
