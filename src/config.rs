//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::view::{Palette, DEFAULT_PALETTE};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
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

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

/// Chart rendering configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Category colors, assigned by category index
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,

    /// Upper bound on the `length` override accepted by the API
    #[serde(default = "default_max_series_length")]
    pub max_series_length: i64,
}

fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
}

fn default_max_series_length() -> i64 {
    3650 // ten years of daily points
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            max_series_length: default_max_series_length(),
        }
    }
}

impl DashboardConfig {
    /// Build the renderer palette, validating every color
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        if let Some(bad) = self.palette.iter().find(|c| !is_hex_color(c)) {
            return Err(ConfigError::Invalid(format!(
                "palette color {:?} is not a #rrggbb hex color",
                bad
            )));
        }

        Palette::new(self.palette.clone())
            .ok_or_else(|| ConfigError::Invalid("palette must contain at least one color".into()))
    }
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
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

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("chartwatch").join("config.toml")),
            Some(PathBuf::from("/etc/chartwatch/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dashboard.palette()?;

        if self.dashboard.max_series_length <= 0 {
            return Err(ConfigError::Invalid(format!(
                "max_series_length must be positive, got {}",
                self.dashboard.max_series_length
            )));
        }

        Ok(())
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // API overrides
        if let Ok(host) = std::env::var("CHARTWATCH_API_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("CHARTWATCH_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Logging overrides
        if let Ok(level) = std::env::var("CHARTWATCH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("CHARTWATCH_LOG_FORMAT") {
            self.logging.format = format;
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

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r##"# Chartwatch Configuration
#
# Environment variables override these settings:
# - CHARTWATCH_API_HOST
# - CHARTWATCH_API_PORT
# - CHARTWATCH_LOG_LEVEL
# - CHARTWATCH_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8090

# Allowed CORS origins (empty = allow any)
cors_origins = []

[dashboard]
# Category colors, assigned by category position and cycled
palette = ["#3b82f6", "#8b5cf6", "#ec4899", "#f59e0b", "#10b981"]

# Largest series length the API will generate on request
max_series_length = 3650

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.port, 8090);
        assert_eq!(config.dashboard.palette.len(), 5);
        assert_eq!(config.dashboard.max_series_length, 3650);
        assert_eq!(config.logging.format, "pretty");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.port, 8090);
        assert_eq!(config.dashboard.palette().unwrap().len(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dashboard]\npalette = [\"#000000\", \"#FFFFFF\"]").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.dashboard.palette, vec!["#000000", "#FFFFFF"]);
        assert_eq!(config.dashboard.max_series_length, 3650);
    }

    #[test]
    fn test_empty_palette_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dashboard]\npalette = []").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_color_rejected() {
        let dashboard = DashboardConfig {
            palette: vec!["#3b82f6".to_string(), "blue".to_string()],
            ..Default::default()
        };
        assert!(matches!(dashboard.palette(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nport = \"not a number\"").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/chartwatch.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_env_overrides() {
        // The only test that touches CHARTWATCH_* variables
        std::env::set_var("CHARTWATCH_API_PORT", "9191");
        std::env::set_var("CHARTWATCH_LOG_FORMAT", "json");

        let config = Config::from_env();
        assert_eq!(config.api.port, 9191);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.api.host, "0.0.0.0");

        // Unparseable ports keep the file or default value
        std::env::set_var("CHARTWATCH_API_PORT", "eighty");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nport = 7000").unwrap();
        let config = Config::load_with_env(file.path()).unwrap();
        assert_eq!(config.api.port, 7000);
        assert_eq!(config.logging.format, "json");

        std::env::remove_var("CHARTWATCH_API_PORT");
        std::env::remove_var("CHARTWATCH_LOG_FORMAT");
    }
}
