//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::dataset::Dataset;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only sample dataset
    pub dataset: Arc<Dataset>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state around the built-in sample dataset
    pub fn new(config: ApiConfig) -> Self {
        Self::with_dataset(Arc::new(Dataset::sample()), config)
    }

    pub fn with_dataset(dataset: Arc<Dataset>, config: ApiConfig) -> Self {
        Self {
            dataset,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Allowed CORS origins; empty means any origin
    pub cors_origins: Vec<String>,
    /// Built frontend to serve alongside the API
    pub ui_dir: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8501,
            request_timeout: Duration::from_secs(30),
            cors_origins: Vec::new(),
            ui_dir: None,
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl From<&Config> for ApiConfig {
    fn from(config: &Config) -> Self {
        Self {
            host: config.server.host.clone(),
            port: config.server.port,
            request_timeout: Duration::from_secs(config.server.request_timeout_secs),
            cors_origins: config.server.cors_origins.clone(),
            ui_dir: config.ui.dist_dir.as_ref().map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.server.port = 9100;
        config.ui.dist_dir = Some("dist".to_string());

        let api = ApiConfig::from(&config);
        assert_eq!(api.addr(), "0.0.0.0:9100");
        assert_eq!(api.request_timeout, Duration::from_secs(30));
        assert_eq!(api.ui_dir, Some(PathBuf::from("dist")));
    }

    #[test]
    fn test_state_uses_sample_dataset() {
        let state = AppState::new(ApiConfig::default());
        assert_eq!(state.dataset.row_count(), 5);
        assert_eq!(state.uptime_seconds(), 0);
    }
}
