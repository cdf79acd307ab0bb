//! Configuration loading and management
//!
//! Configuration comes from an optional YAML file, then environment
//! variables override individual values:
//!
//! | Variable                 | Field             |
//! |--------------------------|-------------------|
//! | `GAME_REVIEWS_HOST`      | `server.host`     |
//! | `GAME_REVIEWS_PORT`      | `server.port`     |
//! | `GAME_REVIEWS_SEED_FILE` | `seed_file`       |
//! | `GAME_REVIEWS_LOG`       | `log_level`       |

use crate::core::error::{ConfigError, GameReviewsResult};
use serde::{Deserialize, Serialize};

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Serve the GraphQL playground at `/graphql/playground`
    pub playground: bool,
}

impl ServerConfig {
    /// `host:port` as passed to the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            playground: true,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,

    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,

    /// YAML seed file replacing the built-in fixtures
    pub seed_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            log_level: "info".to_string(),
            seed_file: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> GameReviewsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&content, Some(path))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> GameReviewsResult<Self> {
        Self::parse(yaml, None)
    }

    fn parse(yaml: &str, file: Option<&str>) -> GameReviewsResult<Self> {
        let config = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: file.map(str::to_string),
            message: e.to_string(),
        })?;
        Ok(config)
    }

    /// File (if any), then process environment overrides
    pub fn load(path: Option<&str>) -> GameReviewsResult<Self> {
        let config = match path {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`
    ///
    /// Takes the lookup as a function so tests need not touch the process
    /// environment.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> GameReviewsResult<Self> {
        if let Some(host) = lookup("GAME_REVIEWS_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("GAME_REVIEWS_PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                field: "server.port".to_string(),
                value: port.clone(),
                message: "expected a port number between 0 and 65535".to_string(),
            })?;
        }
        if let Some(seed_file) = lookup("GAME_REVIEWS_SEED_FILE") {
            self.seed_file = Some(seed_file);
        }
        if let Some(level) = lookup("GAME_REVIEWS_LOG") {
            self.log_level = level;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_address(), "0.0.0.0:8080");
        assert!(config.server.playground);
        assert_eq!(config.log_level, "info");
        assert!(config.seed_file.is_none());
    }

    #[test]
    fn test_yaml_serialization() {
        let config = AppConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert_eq!(AppConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = AppConfig::from_yaml_str("server:\n  port: 4000\n").unwrap();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("GAME_REVIEWS_PORT", "9000"),
            ("GAME_REVIEWS_HOST", "127.0.0.1"),
            ("GAME_REVIEWS_LOG", "debug"),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::default()
            .with_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.server.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_port_override() {
        let err = AppConfig::default()
            .with_overrides(|key| (key == "GAME_REVIEWS_PORT").then(|| "eighty".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("server.port"));
    }
}
