//! Layered configuration: defaults, then `config.toml`, then environment.
//!
//! ```toml
//! [server]
//! bind_addr = "127.0.0.1:8080"
//! cors_permissive = false
//!
//! [database]
//! url = "postgres://localhost/freelance"
//! max_connections = 20
//! acquire_timeout_secs = 30
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::http::ServerConfig;

/// Environment variable overriding `database.url`.
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
/// Environment variable overriding `server.bind_addr`.
pub const ENV_BIND: &str = "FREELANCE_BIND";
/// Environment variable overriding `database.max_connections`.
pub const ENV_MAX_CONNECTIONS: &str = "FREELANCE_MAX_CONNECTIONS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {key}: '{value}'")]
    InvalidEnv { key: &'static str, value: String },
}

/// Connection pool settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/freelance".to_string(),
            max_connections: 20,
            acquire_timeout_secs: 30,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, `~/.freelance/config.toml`
    /// is used if present and defaults otherwise. Environment overrides are
    /// applied last.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::config_path();
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    tracing::debug!(path = %default_path.display(), "no config file, using defaults");
                    Self::default()
                }
            }
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a TOML config file. Missing sections and keys take defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Default config file path: ~/.freelance/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".freelance/config.toml")
    }

    /// Apply overrides from an environment lookup.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_DATABASE_URL) {
            self.database.url = url;
        }

        if let Some(bind) = lookup(ENV_BIND) {
            self.server.bind_addr = bind.parse().map_err(|_| ConfigError::InvalidEnv {
                key: ENV_BIND,
                value: bind.clone(),
            })?;
        }

        if let Some(max) = lookup(ENV_MAX_CONNECTIONS) {
            self.database.max_connections =
                max.parse().map_err(|_| ConfigError::InvalidEnv {
                    key: ENV_MAX_CONNECTIONS,
                    value: max.clone(),
                })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.database.max_connections, 20);
        assert_eq!(config.database.acquire_timeout_secs, 30);
        assert_eq!(config.server.bind_addr.port(), 8080);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[database]\nurl = \"postgres://db/freelance\"\nmax_connections = 5"
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.database.url, "postgres://db/freelance");
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.database.acquire_timeout_secs, 30);
        assert!(!config.server.cors_permissive);
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[database\nurl = ").unwrap();

        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn explicit_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config = AppConfig::default();
        config
            .apply_env(env(&[
                (ENV_DATABASE_URL, "postgres://env/freelance"),
                (ENV_BIND, "0.0.0.0:9000"),
                (ENV_MAX_CONNECTIONS, "7"),
            ]))
            .unwrap();

        assert_eq!(config.database.url, "postgres://env/freelance");
        assert_eq!(config.server.bind_addr.port(), 9000);
        assert_eq!(config.database.max_connections, 7);
    }

    #[test]
    fn invalid_env_value_is_rejected() {
        let mut config = AppConfig::default();
        let err = config
            .apply_env(env(&[(ENV_MAX_CONNECTIONS, "many")]))
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "invalid value for FREELANCE_MAX_CONNECTIONS: 'many'"
        );
    }
}
