//! # Enrollment Dashboard
//!
//! AADHAAR Enrollment Dashboard - A full-stack Rust application serving
//! sample biometric enrollment statistics, charts, and a slider-driven
//! enrollment estimate.
//!
//! ## Modules
//!
//! - [`dataset`]: The built-in sample figures (state table, monthly trend, cards)
//! - [`predict`]: The enrollment estimate (sum of the two age-band sliders)
//! - [`pages`]: The four dashboard pages and app-level text
//! - [`chart`]: SVG rendering of the bar and line charts
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: Tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust
//! use enrollment::{predict, Dataset, OutlierZone, PredictionInput};
//!
//! let dataset = Dataset::sample();
//! assert_eq!(dataset.top_states(1)[0].state, "Maharashtra");
//!
//! let estimate = predict(&PredictionInput::new(50, 100, OutlierZone::No)).unwrap();
//! assert_eq!(estimate.total, 150);
//! ```
//!
//! The estimate is arithmetic, not inference: `total = children + adults`.
//! R² figures shown alongside it are published values carried as text.

pub mod api;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod logging;
pub mod pages;
pub mod predict;

// Re-export top-level types for convenience
pub use dataset::{
    group_thousands, AboutContent, Dataset, MetricCard, ModelScore, MonthlyEnrollment,
    StateEnrollment, Totals,
};

pub use predict::{
    predict, predicted_total, OutlierZone, PredictError, Prediction, PredictionInput,
    SLIDER_MAX, SLIDER_MIN,
};

pub use pages::{AppInfo, Page, PageError};

pub use chart::{monthly_trend_chart, top_states_chart, BarChart, LineChart};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, Loaded, LoggingConfig, ServerConfig, UiConfig};
