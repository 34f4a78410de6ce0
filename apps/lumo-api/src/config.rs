//! Application configuration loaded from environment variables.
//!
//! Fail-fast loading: required variables must be present and valid, or the
//! application exits with a clear error message before binding a socket.

use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing.
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A variable is present but cannot be parsed.
    #[error("Invalid value for {name}: {message}")]
    InvalidVar {
        /// Variable name.
        name: &'static str,
        /// What was wrong with it.
        message: String,
    },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string.
    pub database_url: String,
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Shared secret for session token validation.
    pub jwt_secret: String,
    /// Default log filter directive.
    pub rust_log: String,
}

impl Config {
    /// Load configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `DATABASE_URL` or `JWT_SECRET` is missing,
    /// or `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary lookup function.
    ///
    /// Exists so tests can supply values without mutating process-global
    /// environment state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url =
            lookup("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?;
        let jwt_secret = lookup("JWT_SECRET").ok_or(ConfigError::MissingVar("JWT_SECRET"))?;

        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|e| ConfigError::InvalidVar {
                name: "PORT",
                message: format!("{e}"),
            })?,
            None => 8080,
        };
        let rust_log = lookup("RUST_LOG").unwrap_or_else(|| "info".to_string());

        Ok(Self {
            database_url,
            host,
            port,
            jwt_secret,
            rust_log,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars = env(pairs);
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = load(&[
            ("DATABASE_URL", "postgres://localhost/lumo"),
            ("JWT_SECRET", "s3cret"),
        ])
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_missing_database_url_fails() {
        let err = load(&[("JWT_SECRET", "s3cret")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("DATABASE_URL")));
    }

    #[test]
    fn test_missing_jwt_secret_fails() {
        let err = load(&[("DATABASE_URL", "postgres://localhost/lumo")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("JWT_SECRET")));
    }

    #[test]
    fn test_invalid_port_fails() {
        let err = load(&[
            ("DATABASE_URL", "postgres://localhost/lumo"),
            ("JWT_SECRET", "s3cret"),
            ("PORT", "not-a-port"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { name: "PORT", .. }));
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let config = load(&[
            ("DATABASE_URL", "postgres://localhost/lumo"),
            ("JWT_SECRET", "s3cret"),
            ("HOST", "0.0.0.0"),
            ("PORT", "3000"),
            ("RUST_LOG", "debug,sqlx=warn"),
        ])
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.rust_log, "debug,sqlx=warn");
    }
}
