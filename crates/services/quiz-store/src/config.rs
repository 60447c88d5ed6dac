//! Quiz store configuration.

use std::env;

use common::DatabaseConfig;

/// Quiz store configuration.
#[derive(Debug, Clone, Default)]
pub struct QuizStoreConfig {
    /// Database connection and pool sizing
    pub database: DatabaseConfig,
}

impl QuizStoreConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = DatabaseConfig::default();

        Self {
            database: DatabaseConfig {
                url: env::var("QUIZ_STORE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.url),
                max_connections: env::var("QUIZ_STORE_DB_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(defaults.max_connections),
                min_connections: env::var("QUIZ_STORE_DB_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(defaults.min_connections),
            },
        }
    }
}
