//! REST API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use shoplist_db::DbConfig;

/// REST API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bind host
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// SQLite file (`:memory:` allowed)
    pub db_path: String,

    /// Pool size
    pub db_max_connections: u32,

    /// Seed units and items at startup
    pub seed_catalog: bool,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(ApiConfig {
            host: env::var("SHOPLIST_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),

            port: parse_var("SHOPLIST_PORT", 5000)?,

            db_path: env::var("SHOPLIST_DB_PATH").unwrap_or_else(|_| "shoplist.db".to_string()),

            db_max_connections: parse_var("SHOPLIST_DB_MAX_CONNECTIONS", 5)?,

            seed_catalog: parse_var("SHOPLIST_SEED_CATALOG", true)?,
        })
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue("SHOPLIST_HOST".to_string()))
    }

    /// Database settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        if self.db_path == ":memory:" {
            DbConfig::in_memory()
        } else {
            DbConfig::new(&self.db_path).max_connections(self.db_max_connections)
        }
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name.to_string())),
        Err(_) => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_var_uses_default_when_unset() {
        let port: u16 = parse_var("SHOPLIST_TEST_UNSET_PORT", 5000).unwrap();
        assert_eq!(port, 5000);
    }

    #[test]
    fn test_parse_var_rejects_garbage() {
        env::set_var("SHOPLIST_TEST_BAD_PORT", "not-a-port");
        let err = parse_var::<u16>("SHOPLIST_TEST_BAD_PORT", 5000).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for SHOPLIST_TEST_BAD_PORT");
    }

    #[test]
    fn test_memory_db_uses_single_connection() {
        let config = ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            db_path: ":memory:".to_string(),
            db_max_connections: 5,
            seed_catalog: true,
        };

        assert_eq!(config.db_config().max_connections, 1);
        assert_eq!(config.bind_addr().unwrap().port(), 0);
    }
}
