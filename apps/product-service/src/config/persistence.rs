//! Persistence configuration for the backing store.

use serde::{Deserialize, Serialize};

/// Persistence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceConfig {
    /// SQLite database URL.
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Maximum pool connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

impl PersistenceConfig {
    /// Resolve from `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS`.
    #[must_use]
    pub fn from_env() -> Self {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());
        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_connections);

        Self {
            database_url,
            max_connections,
        }
    }
}

pub(crate) fn default_database_url() -> String {
    "sqlite:products.db".to_string()
}

pub(crate) const fn default_max_connections() -> u32 {
    5
}
