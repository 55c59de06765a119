//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (managed PostgreSQL)
    pub database_url: String,

    /// Origins allowed by the CORS layer; empty means permissive
    pub cors_allowed_origins: Vec<String>,

    /// Runtime configuration
    pub log_level: String,
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            database_url: lookup("DATABASE_URL")
                .filter(|v| !v.is_empty())
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is required"))?,

            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_default(),

            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "pressrun=debug".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
        };

        Ok(config)
    }
}

/// Split a comma separated origin list, dropping blanks
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}
