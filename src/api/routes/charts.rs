//! Chart Routes
//!
//! - GET /api/v1/charts/top-states.svg - Bar chart of the state table
//! - GET /api/v1/charts/monthly-trend.svg - Monthly enrollment line chart

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::chart;

const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// GET /api/v1/charts/top-states.svg
pub async fn top_states(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let svg = chart::top_states_chart(&state.dataset).render();
    ([(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], svg)
}

/// GET /api/v1/charts/monthly-trend.svg
pub async fn monthly_trend(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let svg = chart::monthly_trend_chart(&state.dataset).render();
    ([(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], svg)
}
