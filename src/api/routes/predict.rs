//! Prediction Routes
//!
//! - GET /api/v1/predict/controls - Slider and select definitions
//! - POST /api/v1/predict - Compute an estimate from slider values

use axum::{extract::rejection::JsonRejection, Json};

use crate::api::dto::PredictRequest;
use crate::api::error::ApiResult;
use crate::predict::{self, OutlierZone, Prediction, PredictionControls, PredictionInput};

/// GET /api/v1/predict/controls
pub async fn controls() -> Json<PredictionControls> {
    Json(predict::controls())
}

/// POST /api/v1/predict
///
/// Body errors (bad JSON, wrong types, numbers too large for a count) are
/// reported as `VALIDATION_ERROR` like out-of-range values.
pub async fn predict(
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> ApiResult<Json<Prediction>> {
    let Json(req) = payload?;

    let outlier_zone = match req.outlier_zone.as_deref() {
        Some(zone) => zone.parse::<OutlierZone>()?,
        None => OutlierZone::default(),
    };

    let input = PredictionInput {
        children: req.children,
        adults: req.adults,
        outlier_zone,
    };

    let prediction = predict::predict(&input)?;

    tracing::info!(
        children = prediction.children,
        adults = prediction.adults,
        total = prediction.total,
        "Served enrollment estimate"
    );

    Ok(Json(prediction))
}
