//! App Route
//!
//! - GET /api/v1/app - Title, sidebar text, footer, and page list

use axum::Json;

use crate::pages::AppInfo;

/// GET /api/v1/app
pub async fn app_info() -> Json<AppInfo> {
    Json(AppInfo::new())
}
