//! Export Route
//!
//! - GET /api/v1/export?format=json|csv - Download the state table

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ExportParams, ExportResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dataset::StateEnrollment;

/// GET /api/v1/export
pub async fn export_data(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExportParams>,
) -> ApiResult<Response> {
    let rows = state.dataset.states();

    match params.format.to_lowercase().as_str() {
        "json" => Ok(Json(ExportResponse {
            exported_at: chrono::Utc::now().to_rfc3339(),
            states: rows.to_vec(),
        })
        .into_response()),
        "csv" => {
            let body = to_csv(rows)?;
            Ok((
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                    (
                        header::CONTENT_DISPOSITION,
                        "attachment; filename=\"state_enrollment.csv\"",
                    ),
                ],
                body,
            )
                .into_response())
        }
        other => Err(ApiError::Validation(format!(
            "Unsupported export format '{}' (expected json or csv)",
            other
        ))),
    }
}

/// Serialize rows as CSV with a header line
pub fn to_csv(rows: &[StateEnrollment]) -> ApiResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| ApiError::Internal(format!("CSV encode failed: {}", e)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ApiError::Internal(format!("CSV flush failed: {}", e)))?;

    String::from_utf8(bytes).map_err(|e| ApiError::Internal(format!("CSV not UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn test_to_csv() {
        let ds = Dataset::sample();
        let csv = to_csv(ds.states()).unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "state,total_bio,bio_age_5_17,bio_age_17_plus");
        assert_eq!(lines[2], "Uttar Pradesh,1088920,120000,180000");
    }
}
