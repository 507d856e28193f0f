//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8501
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:8080".to_string(),
        "http://127.0.0.1:8080".to_string(),
    ]
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Frontend hosting configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiConfig {
    /// Directory holding the built frontend (index.html + wasm). When unset
    /// or missing, only the API is served.
    #[serde(default)]
    pub dist_dir: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Defaults plus environment overrides
    pub fn from_env() -> Loaded {
        let mut config = Config::default();
        let errors = config.apply_env_overrides();
        Loaded {
            config,
            source: None,
            errors,
        }
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Loaded, ConfigError> {
        let mut config = Self::load(path)?;
        let errors = config.apply_env_overrides();
        Ok(Loaded {
            config,
            source: Some(path.to_path_buf()),
            errors,
        })
    }

    /// Load from default locations or environment
    ///
    /// A file that fails to load is recorded in [`Loaded::errors`] and the
    /// search moves on. Nothing is logged here; call [`Loaded::report`]
    /// once logging is set up.
    pub fn load_default() -> Loaded {
        Self::load_first(&Self::default_paths(), |key| std::env::var(key).ok())
    }

    fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("enrollment").join("config.toml")),
            Some(PathBuf::from("/etc/enrollment/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn load_first(paths: &[PathBuf], lookup: impl Fn(&str) -> Option<String>) -> Loaded {
        let mut errors = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(mut config) => {
                    errors.extend(config.apply_overrides(&lookup));
                    return Loaded {
                        config,
                        source: Some(path.clone()),
                        errors,
                    };
                }
                Err(e) => errors.push(e),
            }
        }

        let mut config = Config::default();
        errors.extend(config.apply_overrides(&lookup));
        Loaded {
            config,
            source: None,
            errors,
        }
    }

    /// Socket address string for the server
    pub fn addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) -> Vec<ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(host) = lookup("ENROLLMENT_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("ENROLLMENT_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => errors.push(ConfigError::InvalidEnv {
                    key: "ENROLLMENT_PORT",
                    value: port,
                }),
            }
        }

        if let Some(dir) = lookup("ENROLLMENT_UI_DIR") {
            self.ui.dist_dir = Some(dir);
        }

        if let Some(level) = lookup("ENROLLMENT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("ENROLLMENT_LOG_FORMAT") {
            self.logging.format = format;
        }

        errors
    }
}

/// A loaded configuration and what went wrong on the way
#[derive(Debug)]
pub struct Loaded {
    pub config: Config,
    /// File the config came from, `None` for built-in defaults
    pub source: Option<PathBuf>,
    /// Files that failed to load and ignored overrides
    pub errors: Vec<ConfigError>,
}

impl Loaded {
    /// Log where the config came from and every problem found
    pub fn report(&self) {
        for error in &self.errors {
            tracing::warn!("{}", error);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Ignoring invalid {key}: {value}")]
    InvalidEnv { key: &'static str, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Enrollment Dashboard Configuration
#
# Environment variables override these settings:
# - ENROLLMENT_HOST
# - ENROLLMENT_PORT
# - ENROLLMENT_UI_DIR
# - ENROLLMENT_LOG_LEVEL
# - ENROLLMENT_LOG_FORMAT

[server]
# Server host
host = "0.0.0.0"

# Server port
port = 8501

# Allowed CORS origins
cors_origins = ["http://localhost:8080", "http://127.0.0.1:8080"]

# Request timeout in seconds
request_timeout_secs = 30

[ui]
# Directory with the built frontend (trunk build output)
# dist_dir = "./enrollment-ui/dist"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.addr(), "0.0.0.0:8501");
        assert_eq!(config.logging.format, "pretty");
        assert!(config.ui.dist_dir.is_none());
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.server.cors_origins.len(), 2);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 9000\n\n[ui]\ndist_dir = \"dist\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.ui.dist_dir.as_deref(), Some("dist"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_errors() {
        let err = Config::load(Path::new("/nonexistent/enrollment.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("ENROLLMENT_HOST", "127.0.0.1"),
            ("ENROLLMENT_PORT", "7000"),
            ("ENROLLMENT_UI_DIR", "/srv/ui"),
            ("ENROLLMENT_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        let errors = config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));
        assert!(errors.is_empty());

        assert_eq!(config.addr(), "127.0.0.1:7000");
        assert_eq!(config.ui.dist_dir.as_deref(), Some("/srv/ui"));
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_port_override_is_ignored() {
        let mut config = Config::default();
        let errors = config
            .apply_overrides(|key| (key == "ENROLLMENT_PORT").then(|| "not-a-port".to_string()));
        assert_eq!(config.server.port, 8501);
        assert!(matches!(
            errors.as_slice(),
            [ConfigError::InvalidEnv { key: "ENROLLMENT_PORT", .. }]
        ));
    }

    #[test]
    fn test_malformed_file_in_search_list_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        let missing = dir.path().join("missing.toml");
        std::fs::write(&broken, "[server\nport = ").unwrap();
        std::fs::write(&good, "[server]\nport = 9100\n").unwrap();

        let loaded = Config::load_first(&[missing, broken.clone(), good.clone()], |_| None);
        assert_eq!(loaded.source.as_deref(), Some(good.as_path()));
        assert_eq!(loaded.config.server.port, 9100);
        assert!(matches!(
            loaded.errors.as_slice(),
            [ConfigError::Parse { path, .. }] if *path == broken
        ));
    }

    #[test]
    fn test_malformed_only_file_falls_back_with_error() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("config.toml");
        std::fs::write(&broken, "port = [").unwrap();

        let loaded = Config::load_first(&[broken], |_| None);
        assert!(loaded.source.is_none());
        assert_eq!(loaded.config.server.port, 8501);
        assert_eq!(loaded.errors.len(), 1);
    }

    #[test]
    fn test_server_section_without_origins_keeps_default_origins() {
        let config = Config::parse("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.cors_origins, Config::default().server.cors_origins);
    }
}
