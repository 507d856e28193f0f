//! About Route
//!
//! - GET /api/v1/about - Project overview and reported model scores

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::AboutResponse;
use crate::api::state::AppState;
use crate::dataset::Dataset;
use crate::pages::{Page, FOOTER};

pub(crate) fn build_about(dataset: &Dataset) -> AboutResponse {
    let content = dataset.about().clone();
    AboutResponse {
        page: Page::About,
        header: Page::About.header(),
        markdown: content.to_markdown(),
        content,
        footer: FOOTER.to_string(),
    }
}

/// GET /api/v1/about
pub async fn about(State(state): State<Arc<AppState>>) -> Json<AboutResponse> {
    Json(build_about(&state.dataset))
}
