//! Analytics Routes
//!
//! - GET /api/v1/analytics - Monthly trend and data quality cards

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{AnalyticsResponse, TrendPoint};
use crate::api::state::AppState;
use crate::dataset::Dataset;
use crate::pages::Page;

pub(crate) fn build_analytics(dataset: &Dataset) -> AnalyticsResponse {
    AnalyticsResponse {
        page: Page::Analytics,
        header: Page::Analytics.header(),
        trend_title: "Enrollment Trends".to_string(),
        caption: dataset.trend_caption().to_string(),
        color: dataset.trend_color().to_string(),
        trend: dataset.monthly_trend().iter().map(TrendPoint::from).collect(),
        peak_month: dataset.peak_month().as_ref().map(TrendPoint::from),
        quality_title: "Data Quality".to_string(),
        quality: dataset.quality_cards().to_vec(),
    }
}

/// GET /api/v1/analytics
pub async fn analytics(State(state): State<Arc<AppState>>) -> Json<AnalyticsResponse> {
    Json(build_analytics(&state.dataset))
}
