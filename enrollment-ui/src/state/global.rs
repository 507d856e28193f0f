//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the data types the
//! pages render.

use leptos::*;
use serde::Deserialize;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Title, sidebar text and page list from the API
    pub app_info: RwSignal<Option<AppInfo>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
}

/// Sidebar entry for one page
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PageEntry {
    pub label: String,
    pub header: String,
    pub route: String,
}

/// App-level metadata
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AppInfo {
    pub page_title: String,
    pub title: String,
    pub sidebar_info: String,
    pub footer: String,
    pub pages: Vec<PageEntry>,
}

impl Default for AppInfo {
    /// Shown until the API answers, and if it never does
    fn default() -> Self {
        let page = |label: &str, header: &str, route: &str| PageEntry {
            label: label.to_string(),
            header: header.to_string(),
            route: route.to_string(),
        };

        Self {
            page_title: "AADHAAR Enrollment Predictor".to_string(),
            title: "🏛️ AADHAAR Biometric Enrollment Prediction".to_string(),
            sidebar_info: "Real-time AADHAAR enrollment prediction using ML models trained on 1.5M+ records".to_string(),
            footer: "AADHAAR Hackathon 2025 | Data-Driven Enrollment Prediction System".to_string(),
            pages: vec![
                page("Dashboard", "📊 Enrollment Dashboard", "/"),
                page("Predictions", "🎯 Enrollment Predictions", "/predictions"),
                page("Analytics", "📈 Advanced Analytics", "/analytics"),
                page("About", "ℹ️ About This Project", "/about"),
            ],
        }
    }
}

/// KPI card
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MetricCardData {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub delta: Option<String>,
}

/// State row with its bar colour
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct StateRow {
    pub state: String,
    pub total_bio: u64,
    pub bio_age_5_17: u64,
    pub bio_age_17_plus: u64,
    pub color: String,
}

/// Monthly trend point
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub month: u32,
    pub label: String,
    pub enrollments: u64,
}

/// Reported model score
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ModelScore {
    pub model: String,
    pub r_squared: String,
}

/// Prediction result from the API
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Prediction {
    pub children: u32,
    pub adults: u32,
    pub total: u64,
    pub formatted_total: String,
    pub outlier_zone: String,
    pub reported_r_squared: String,
    pub message: String,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        app_info: create_rw_signal(None),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// App info from the API, or the built-in defaults
    pub fn app_info_or_default(&self) -> AppInfo {
        self.app_info.get().unwrap_or_default()
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        }).forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_app_info_pages() {
        let info = AppInfo::default();
        let routes: Vec<_> = info.pages.iter().map(|p| p.route.as_str()).collect();
        assert_eq!(routes, vec!["/", "/predictions", "/analytics", "/about"]);
    }

    #[test]
    fn test_state_row_decodes_flattened_json() {
        let row: StateRow = serde_json::from_str(
            r##"{"state":"Bihar","total_bio":465136,"bio_age_5_17":60000,"bio_age_17_plus":100000,"color":"#FFD93D"}"##,
        )
        .unwrap();
        assert_eq!(row.state, "Bihar");
        assert_eq!(row.color, "#FFD93D");
    }
}
