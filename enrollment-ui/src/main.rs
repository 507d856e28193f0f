//! Enrollment Dashboard UI
//!
//! Browser frontend for the AADHAAR enrollment dashboard, built with Leptos
//! (WASM).
//!
//! # Pages
//!
//! - Dashboard: KPI cards and the top states bar chart
//! - Predictions: sliders driving the enrollment estimate
//! - Analytics: monthly trend and data quality
//! - About: project description
//!
//! This is a client-side rendered (CSR) application. It talks to the
//! dashboard server over HTTP and is usually served by it as well.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
