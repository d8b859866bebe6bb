//! Configuration module for the product service.
//!
//! Serde-default config structs resolved from environment variables.
//! Anything unset falls back to a default, so the service starts with no
//! configuration at all.

mod persistence;
mod server;

use serde::{Deserialize, Serialize};

pub use persistence::PersistenceConfig;
pub use server::ServerConfig;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Persistence configuration.
    #[serde(default)]
    pub persistence: PersistenceConfig,
}

impl Config {
    /// Resolve the configuration from environment variables, falling back
    /// to defaults for anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            persistence: PersistenceConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_every_field() {
        let config: Config = serde_json::from_str("{}").unwrap();

        assert_eq!(config.server.http_port, 8080);
        assert_eq!(config.server.bind_address, "0.0.0.0");
        assert_eq!(config.persistence.database_url, "sqlite:products.db");
        assert_eq!(config.persistence.max_connections, 5);
    }
}
