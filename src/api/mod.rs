//! Enrollment Dashboard REST API
//!
//! HTTP API layer, built with Axum.
//!
//! # Endpoints
//!
//! ## App
//! - `GET /api/v1/app` - Title, sidebar text, footer, page list
//! - `GET /api/v1/pages/:page` - Payload for one page
//!
//! ## Dashboard
//! - `GET /api/v1/dashboard` - KPI cards and top-states chart data
//! - `GET /api/v1/states` - State table (`?top=N` for the largest N)
//! - `GET /api/v1/states/:name` - One state
//!
//! ## Predictions
//! - `GET /api/v1/predict/controls` - Slider and select definitions
//! - `POST /api/v1/predict` - Sum of the two age-band sliders
//!
//! ## Analytics / About
//! - `GET /api/v1/analytics` - Monthly trend and data quality cards
//! - `GET /api/v1/about` - Project overview
//!
//! ## Charts / Export
//! - `GET /api/v1/charts/top-states.svg`
//! - `GET /api/v1/charts/monthly-trend.svg`
//! - `GET /api/v1/export?format=json|csv`
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! When a frontend build directory is configured, every other path is served
//! from it, with `index.html` as the fallback for client-side routes.
//!
//! # Example
//!
//! ```rust,ignore
//! use enrollment::api::{serve, ApiConfig, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::default();
//!     let state = AppState::new(config.clone());
//!     serve(state, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/app", get(routes::app::app_info))
        .route("/pages/:page", get(routes::pages::page_content))
        // Dashboard routes
        .route("/dashboard", get(routes::dashboard::dashboard))
        .route("/states", get(routes::dashboard::list_states))
        .route("/states/:name", get(routes::dashboard::get_state))
        // Prediction routes
        .route("/predict", post(routes::predict::predict))
        .route("/predict/controls", get(routes::predict::controls))
        // Analytics and About
        .route("/analytics", get(routes::analytics::analytics))
        .route("/about", get(routes::about::about))
        // Charts and export
        .route("/charts/top-states.svg", get(routes::charts::top_states))
        .route("/charts/monthly-trend.svg", get(routes::charts::monthly_trend))
        .route("/export", get(routes::export::export_data));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config.cors_origins);
    let timeout = state.config.request_timeout;
    let ui_dir = state.config.ui_dir.clone();

    let shared_state = Arc::new(state);

    let mut router = Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes);

    match ui_dir {
        Some(dir) if dir.is_dir() => {
            tracing::info!("Serving frontend from {:?}", dir);
            let index = dir.join("index.html");
            router = router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
        }
        Some(dir) => {
            tracing::warn!("Frontend directory {:?} not found, serving API only", dir);
        }
        None => {}
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .layer(cors)
        .with_state(shared_state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();

    if parsed.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Enrollment dashboard listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Enrollment dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        build_router(AppState::new(ApiConfig::default()))
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_json(app: Router, uri: &str, body: &str) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        for uri in ["/health/live", "/health/ready", "/health"] {
            let response = get(create_test_app(), uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        }

        let body = body_json(get(create_test_app(), "/health").await).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["dataset_rows"], 5);
    }

    #[tokio::test]
    async fn test_app_info() {
        let body = body_json(get(create_test_app(), "/api/v1/app").await).await;
        assert_eq!(body["page_title"], "AADHAAR Enrollment Predictor");
        assert_eq!(body["pages"].as_array().unwrap().len(), 4);
        assert_eq!(body["default_page"], "dashboard");
    }

    #[tokio::test]
    async fn test_dashboard() {
        let body = body_json(get(create_test_app(), "/api/v1/dashboard").await).await;
        assert_eq!(body["kpis"][1]["label"], "States Covered");
        assert_eq!(body["kpis"][1]["delta"], "Complete");
        assert_eq!(body["top_states"][0]["state"], "Maharashtra");
        assert_eq!(body["top_states"][0]["color"], "#FF6B6B");
    }

    #[tokio::test]
    async fn test_states() {
        let body = body_json(get(create_test_app(), "/api/v1/states?top=2").await).await;
        assert_eq!(body["total"], 2);
        assert_eq!(body["states"][1]["state"], "Uttar Pradesh");
        assert_eq!(body["states"][0]["other_age_bio"], 790_686);
        assert_eq!(body["totals"]["total_bio"], 3_820_778u64);

        let response = get(create_test_app(), "/api/v1/states?top=0").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_state_by_name() {
        let response = get(create_test_app(), "/api/v1/states/karnataka").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["total_bio"], 474_700);
        assert_eq!(body["other_age_bio"], 344_700);

        let response = get(create_test_app(), "/api/v1/states/Kerala").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_predict() {
        let response = post_json(
            create_test_app(),
            "/api/v1/predict",
            r#"{"children": 50, "adults": 100, "outlier_zone": "yes"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["total"], 150);
        assert_eq!(body["outlier_zone"], "Yes");
        assert_eq!(body["message"], "Predicted: 150 records (R² = 1.0000)");
    }

    #[tokio::test]
    async fn test_predict_defaults() {
        let body = body_json(post_json(create_test_app(), "/api/v1/predict", "{}").await).await;
        assert_eq!(body["total"], 150);
        assert_eq!(body["outlier_zone"], "No");
    }

    #[tokio::test]
    async fn test_predict_out_of_range() {
        let response = post_json(
            create_test_app(),
            "/api/v1/predict",
            r#"{"children": 1001, "adults": 0}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let response = post_json(
            create_test_app(),
            "/api/v1/predict",
            r#"{"children": 1, "adults": 1, "outlier_zone": "sometimes"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_predict_invalid_json() {
        let response = post_json(create_test_app(), "/api/v1/predict", "not json").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_predict_oversized_count_is_validation_error() {
        let response = post_json(
            create_test_app(),
            "/api/v1/predict",
            r#"{"children": 99999999999999999999, "adults": 1}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_predict_wrong_type_is_validation_error() {
        let response =
            post_json(create_test_app(), "/api/v1/predict", r#"{"children": "50"}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analytics_and_about() {
        let body = body_json(get(create_test_app(), "/api/v1/analytics").await).await;
        assert_eq!(body["trend"].as_array().unwrap().len(), 12);
        assert_eq!(body["caption"], "Monthly Trend (Peak July)");
        assert_eq!(body["quality"][2]["value"], "30K");

        let body = body_json(get(create_test_app(), "/api/v1/about").await).await;
        assert_eq!(body["content"]["model_scores"][2]["r_squared"], "0.9988");
        assert!(body["markdown"].as_str().unwrap().contains("SIH 2025"));
    }

    #[tokio::test]
    async fn test_pages() {
        let body = body_json(get(create_test_app(), "/api/v1/pages/Predictions").await).await;
        assert_eq!(body["header"], "🎯 Enrollment Predictions");
        assert_eq!(body["controls"]["sliders"][0]["max"], 1000);

        let body = body_json(get(create_test_app(), "/api/v1/pages/analytics").await).await;
        assert_eq!(body["page"], "analytics");

        let response = get(create_test_app(), "/api/v1/pages/settings").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_chart_svg() {
        let response = get(create_test_app(), "/api/v1/charts/top-states.svg").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/svg+xml");
        let svg = body_text(response).await;
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Tamil Nadu"));

        let svg = body_text(get(create_test_app(), "/api/v1/charts/monthly-trend.svg").await).await;
        assert!(svg.contains("<polyline"));
    }

    #[tokio::test]
    async fn test_export() {
        let response = get(create_test_app(), "/api/v1/export?format=csv").await;
        assert_eq!(response.status(), StatusCode::OK);
        let csv = body_text(response).await;
        assert!(csv.starts_with("state,total_bio"));

        let body = body_json(get(create_test_app(), "/api/v1/export").await).await;
        assert_eq!(body["states"].as_array().unwrap().len(), 5);

        let response = get(create_test_app(), "/api/v1/export?format=xml").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_ui_fallback_serves_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>dashboard</html>").unwrap();

        let config = ApiConfig {
            ui_dir: Some(dir.path().to_path_buf()),
            ..ApiConfig::default()
        };
        let app = build_router(AppState::new(config));

        let response = get(app.clone(), "/analytics").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("dashboard"));

        // API routes still win over the fallback
        let response = get(app, "/api/v1/app").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_without_ui() {
        let response = get(create_test_app(), "/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
