//! HTTP API Client
//!
//! Functions for communicating with the dashboard REST API.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::state::global::{
    AppInfo, MetricCardData, ModelScore, Prediction, StateRow, TrendPoint,
};

/// Default API base URL (same origin as the page)
pub const DEFAULT_API_BASE: &str = "/api/v1";

const API_URL_KEY: &str = "enrollment_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    normalize_base(&url)
}

/// Remove trailing slashes
pub fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DashboardResponse {
    pub header: String,
    pub kpis: Vec<MetricCardData>,
    pub chart_title: String,
    pub x_label: String,
    pub top_states: Vec<StateRow>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct AnalyticsResponse {
    pub header: String,
    pub trend_title: String,
    pub caption: String,
    pub color: String,
    pub trend: Vec<TrendPoint>,
    pub quality_title: String,
    pub quality: Vec<MetricCardData>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct AboutContent {
    pub heading: String,
    pub overview: String,
    pub features: Vec<String>,
    pub model_scores: Vec<ModelScore>,
    pub built_for: String,
    pub status: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct AboutResponse {
    pub header: String,
    pub content: AboutContent,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
}

impl std::fmt::Display for ApiErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}

// ============ API Functions ============

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let status = response.status();
        return Err(match response.json::<ApiErrorBody>().await {
            Ok(body) => body.error.to_string(),
            Err(_) => format!("Request failed with status {}", status),
        });
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&format!("{}{}", get_api_base(), path))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    decode(response).await
}

/// Fetch title, sidebar text and page list
pub async fn fetch_app_info() -> Result<AppInfo, String> {
    get_json("/app").await
}

/// Fetch KPI cards and top states
pub async fn fetch_dashboard() -> Result<DashboardResponse, String> {
    get_json("/dashboard").await
}

/// Fetch the monthly trend and quality cards
pub async fn fetch_analytics() -> Result<AnalyticsResponse, String> {
    get_json("/analytics").await
}

/// Fetch the About page content
pub async fn fetch_about() -> Result<AboutResponse, String> {
    get_json("/about").await
}

/// Request an estimate for the given slider values
pub async fn predict(children: u32, adults: u32, outlier_zone: &str) -> Result<Prediction, String> {
    #[derive(serde::Serialize)]
    struct PredictRequest<'a> {
        children: u32,
        adults: u32,
        outlier_zone: &'a str,
    }

    let body = PredictRequest {
        children,
        adults,
        outlier_zone,
    };

    let response = Request::post(&format!("{}/predict", get_api_base()))
        .json(&body)
        .map_err(|e| format!("Serialize error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    decode(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("http://localhost:8501/api/v1/"), "http://localhost:8501/api/v1");
        assert_eq!(normalize_base(" /api/v1 "), "/api/v1");
    }

    #[test]
    fn test_error_body_decodes() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"error":{"code":"VALIDATION_ERROR","message":"children must be between 0 and 1000, got 1001"},"request_id":"x"}"#,
        )
        .unwrap();
        assert_eq!(body.error.code, "VALIDATION_ERROR");
        assert_eq!(
            body.error.to_string(),
            "children must be between 0 and 1000, got 1001 (VALIDATION_ERROR)"
        );
    }
}
