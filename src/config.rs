//! Configuration management for the trip budget service
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TripBudgetError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Root configuration structure for the trip budget service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripBudgetConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Cross-origin policy
    #[serde(default)]
    pub cors: CorsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Span export configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    /// HTTPS configuration
    #[serde(default)]
    pub tls: TlsConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Maximum accepted request body in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

/// Cross-origin resource sharing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Origins allowed to call the API; `*` allows any
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// OpenTelemetry export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// OTLP/HTTP traces endpoint; export is off when unset
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
    /// Service name reported with exported spans
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

/// PEM certificate and key for HTTPS serving
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TlsConfig {
    #[serde(default)]
    pub cert_path: Option<PathBuf>,
    #[serde(default)]
    pub key_path: Option<PathBuf>,
}

impl TlsConfig {
    /// Both halves configured
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.cert_path.is_some() && self.key_path.is_some()
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_body_bytes() -> usize {
    64 * 1024
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "https://enchanting-gumdrop-6882e1.netlify.app".to_string(),
        "http://localhost:3000".to_string(),
    ]
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_service_name() -> String {
    "trip-budget".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            otlp_endpoint: None,
            service_name: default_service_name(),
        }
    }
}

impl TripBudgetConfig {
    /// Load configuration from the given file, or the default locations when
    /// `None`, layered under environment overrides
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path()
                .filter(|path| path.exists())
                .unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. TRIP_BUDGET_SERVER__PORT=8080
        builder = builder.add_source(
            Environment::with_prefix("TRIP_BUDGET")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins"),
        );

        // Hosting platforms hand out the port as a bare PORT variable
        builder = builder
            .set_override_option("server.port", env::var("PORT").ok())
            .with_context(|| "Failed to apply PORT override")?;

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TripBudgetConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("trip-budget").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_host();
        }
        if self.server.max_body_bytes == 0 {
            self.server.max_body_bytes = default_max_body_bytes();
        }
        if self.cors.allowed_origins.is_empty() {
            self.cors.allowed_origins = default_allowed_origins();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.telemetry.service_name.is_empty() {
            self.telemetry.service_name = default_service_name();
        }
        if self
            .telemetry
            .otlp_endpoint
            .as_ref()
            .is_some_and(|endpoint| endpoint.trim().is_empty())
        {
            self.telemetry.otlp_endpoint = None;
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        self.validate_tls()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(TripBudgetError::config("Server port cannot be 0").into());
        }

        if self.server.max_body_bytes < 1024 {
            return Err(
                TripBudgetError::config("Request body limit must be at least 1024 bytes").into(),
            );
        }

        if self.server.max_body_bytes > 10 * 1024 * 1024 {
            return Err(TripBudgetError::config(
                "Request body limit cannot exceed 10485760 bytes (10 MB)",
            )
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TripBudgetError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TripBudgetError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for origin in &self.cors.allowed_origins {
            if origin != "*" && !is_http_url(origin) {
                return Err(TripBudgetError::config(format!(
                    "CORS origin '{origin}' must be '*' or an HTTP or HTTPS origin"
                ))
                .into());
            }
        }

        if let Some(endpoint) = &self.telemetry.otlp_endpoint {
            if !is_http_url(endpoint) {
                return Err(TripBudgetError::config(
                    "OTLP endpoint must be a valid HTTP or HTTPS URL",
                )
                .into());
            }
        }

        Ok(())
    }

    /// Certificate and key come as a pair
    fn validate_tls(&self) -> Result<()> {
        if self.tls.cert_path.is_some() != self.tls.key_path.is_some() {
            return Err(TripBudgetError::config(
                "TLS needs both cert_path and key_path, or neither",
            )
            .into());
        }
        Ok(())
    }
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = TripBudgetConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.max_body_bytes, 65536);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.cors.allowed_origins.len(), 2);
        assert!(config.telemetry.otlp_endpoint.is_none());
        assert!(!config.tls.enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = TripBudgetConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_invalid_log_format() {
        let mut config = TripBudgetConfig::default();
        config.logging.format = "xml".to_string();
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("Invalid log format"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = TripBudgetConfig::default();
        config.server.port = 0;
        assert!(config.validate().unwrap_err().to_string().contains("port cannot be 0"));

        let mut config = TripBudgetConfig::default();
        config.server.max_body_bytes = 100 * 1024 * 1024;
        assert!(config.validate().unwrap_err().to_string().contains("cannot exceed"));
    }

    #[test]
    fn test_config_validation_origins() {
        let mut config = TripBudgetConfig::default();
        config.cors.allowed_origins = vec!["*".to_string()];
        assert!(config.validate().is_ok());

        config.cors.allowed_origins = vec!["example.com".to_string()];
        assert!(config.validate().unwrap_err().to_string().contains("CORS origin"));
    }

    #[test]
    fn test_config_validation_otlp_endpoint() {
        let mut config = TripBudgetConfig::default();
        config.telemetry.otlp_endpoint = Some("localhost:4318".to_string());
        assert!(config.validate().is_err());

        config.telemetry.otlp_endpoint = Some("http://localhost:4318/v1/traces".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_tls_pairing() {
        let mut config = TripBudgetConfig::default();
        config.tls.cert_path = Some(PathBuf::from("cert.pem"));
        assert!(config.validate().unwrap_err().to_string().contains("TLS"));

        config.tls.key_path = Some(PathBuf::from("key.pem"));
        assert!(config.validate().is_ok());
        assert!(config.tls.enabled());
    }

    #[test]
    fn test_apply_defaults_fills_blanks() {
        let mut config = TripBudgetConfig::default();
        config.server.host.clear();
        config.cors.allowed_origins.clear();
        config.logging.level.clear();
        config.telemetry.otlp_endpoint = Some("  ".to_string());
        config.apply_defaults();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.cors.allowed_origins.len(), 2);
        assert_eq!(config.logging.level, "info");
        assert!(config.telemetry.otlp_endpoint.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let path = env::temp_dir().join(format!("trip-budget-test-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[server]\nport = 8088\n\n[cors]\nallowed_origins = [\"https://trips.example\"]\n\n[logging]\nformat = \"json\""
        )
        .unwrap();

        let config = TripBudgetConfig::load_from_path(Some(path.clone()));
        std::fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        // PORT may be set by the environment running the tests
        if env::var("PORT").is_err() {
            assert_eq!(config.server.port, 8088);
        }
        assert_eq!(config.cors.allowed_origins, vec!["https://trips.example"]);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = TripBudgetConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("trip-budget"));
            assert!(path.to_string_lossy().contains("config.toml"));
        }
    }
}
