//! Dashboard Routes
//!
//! - GET /api/v1/dashboard - KPI cards and the top-states chart data
//! - GET /api/v1/states - The state table (optionally `?top=N`)
//! - GET /api/v1/states/:name - One state by name

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{DashboardResponse, StateDetail, StatesParams, StatesResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dataset::Dataset;
use crate::pages::Page;

pub(crate) fn build_dashboard(dataset: &Dataset) -> DashboardResponse {
    DashboardResponse {
        page: Page::Dashboard,
        header: Page::Dashboard.header(),
        kpis: dataset.kpi_cards().to_vec(),
        chart_title: "Top States by Enrollment".to_string(),
        x_label: "Total Biometric Records".to_string(),
        top_states: dataset.colored_states(),
    }
}

/// GET /api/v1/dashboard
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardResponse> {
    Json(build_dashboard(&state.dataset))
}

/// GET /api/v1/states
pub async fn list_states(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StatesParams>,
) -> ApiResult<Json<StatesResponse>> {
    let states: Vec<StateDetail> = match params.top {
        Some(0) => {
            return Err(ApiError::Validation("top must be at least 1".to_string()));
        }
        Some(n) => state.dataset.top_states(n).into_iter().map(StateDetail::from).collect(),
        None => state.dataset.states().iter().map(StateDetail::from).collect(),
    };

    Ok(Json(StatesResponse {
        total: states.len(),
        states,
        totals: state.dataset.totals(),
    }))
}

/// GET /api/v1/states/:name
pub async fn get_state(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<StateDetail>> {
    state
        .dataset
        .state(&name)
        .map(|row| Json(StateDetail::from(row)))
        .ok_or_else(|| ApiError::NotFound(format!("State '{}' not found", name)))
}
