//! Page Route
//!
//! - GET /api/v1/pages/:page - Payload for one page, selected by slug or label
//!
//! This is the page selector as a single endpoint: the same branch the
//! sidebar makes, returning whichever payload the chosen page shows.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::routes::{about::build_about, analytics::build_analytics, dashboard::build_dashboard};
use crate::api::state::AppState;
use crate::pages::Page;
use crate::predict;

/// GET /api/v1/pages/:page
pub async fn page_content(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<Value>> {
    let page: Page = name.parse()?;
    tracing::debug!(page = %page, "Rendering page payload");

    let value = match page {
        Page::Dashboard => serde_json::to_value(build_dashboard(&state.dataset)),
        Page::Analytics => serde_json::to_value(build_analytics(&state.dataset)),
        Page::About => serde_json::to_value(build_about(&state.dataset)),
        Page::Predictions => Ok(json!({
            "page": page,
            "header": page.header(),
            "controls": predict::controls(),
        })),
    }
    .map_err(|e| ApiError::Internal(format!("Failed to encode page: {}", e)))?;

    Ok(Json(value))
}
