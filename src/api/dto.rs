//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::dataset::{AboutContent, ColoredState, MetricCard, MonthlyEnrollment, StateEnrollment, Totals};
use crate::pages::Page;
use crate::predict::{DEFAULT_ADULTS, DEFAULT_CHILDREN};

// ============================================
// DASHBOARD DTOs
// ============================================

/// Dashboard page payload
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub page: Page,
    pub header: String,
    /// KPI cards, left to right
    pub kpis: Vec<MetricCard>,
    pub chart_title: String,
    pub x_label: String,
    /// Rows for the bar chart, with colours
    pub top_states: Vec<ColoredState>,
}

/// Query params for the state list
#[derive(Debug, Deserialize)]
pub struct StatesParams {
    /// Return only the N largest states
    #[serde(default)]
    pub top: Option<usize>,
}

/// One table row plus the records outside both age bands
#[derive(Debug, Serialize)]
pub struct StateDetail {
    #[serde(flatten)]
    pub row: StateEnrollment,
    pub other_age_bio: u64,
}

impl From<&StateEnrollment> for StateDetail {
    fn from(row: &StateEnrollment) -> Self {
        Self {
            row: row.clone(),
            other_age_bio: row.other_age_bio(),
        }
    }
}

/// State table response
#[derive(Debug, Serialize)]
pub struct StatesResponse {
    pub states: Vec<StateDetail>,
    pub total: usize,
    pub totals: Totals,
}

// ============================================
// PREDICTION DTOs
// ============================================

/// Prediction request; missing sliders take their default positions
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default = "default_children")]
    pub children: i64,
    #[serde(default = "default_adults")]
    pub adults: i64,
    /// "No" or "Yes", case-insensitive; defaults to "No"
    #[serde(default)]
    pub outlier_zone: Option<String>,
}

fn default_children() -> i64 {
    DEFAULT_CHILDREN as i64
}

fn default_adults() -> i64 {
    DEFAULT_ADULTS as i64
}

// ============================================
// ANALYTICS DTOs
// ============================================

/// One point on the monthly trend
#[derive(Debug, Serialize)]
pub struct TrendPoint {
    pub month: u32,
    pub label: String,
    pub enrollments: u64,
}

impl From<&MonthlyEnrollment> for TrendPoint {
    fn from(m: &MonthlyEnrollment) -> Self {
        Self {
            month: m.month,
            label: m.label().to_string(),
            enrollments: m.enrollments,
        }
    }
}

/// Analytics page payload
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub page: Page,
    pub header: String,
    pub trend_title: String,
    pub caption: String,
    pub color: String,
    pub trend: Vec<TrendPoint>,
    /// Month with the highest count, computed from `trend`
    pub peak_month: Option<TrendPoint>,
    pub quality_title: String,
    pub quality: Vec<MetricCard>,
}

// ============================================
// ABOUT DTOs
// ============================================

/// About page payload
#[derive(Debug, Serialize)]
pub struct AboutResponse {
    pub page: Page,
    pub header: String,
    pub markdown: String,
    pub content: AboutContent,
    pub footer: String,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or unhealthy
    pub status: String,
    /// Rows in the loaded state table
    pub dataset_rows: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
    /// Current server time (RFC 3339)
    pub timestamp: String,
}

// ============================================
// EXPORT DTOs
// ============================================

/// Export query parameters
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    /// Format: json or csv
    #[serde(default = "default_export_format")]
    pub format: String,
}

fn default_export_format() -> String {
    "json".to_string()
}

/// JSON export body
#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub exported_at: String,
    pub states: Vec<StateEnrollment>,
}
