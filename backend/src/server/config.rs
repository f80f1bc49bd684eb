//! Environment-driven application configuration.
//!
//! All server-side environment variables are read in one place so the rest of
//! the crate works with typed values. Services degrade gracefully: a missing
//! `DATABASE_URL` is allowed and leaves persistence-backed routes reporting
//! 503 until one is configured.

use std::net::SocketAddr;

use thiserror::Error;

/// Deployment environment the server runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    /// Local development; also the default when `APP_ENV` is unset.
    #[default]
    Development,
    /// Pre-production staging.
    Staging,
    /// Production.
    Production,
}

impl AppEnv {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "development" => Some(Self::Development),
            "staging" => Some(Self::Staging),
            "production" => Some(Self::Production),
            _ => None,
        }
    }
}

/// Configuration failures that abort startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `APP_ENV` was set to an unknown value.
    #[error("unrecognised APP_ENV value: {0}")]
    UnknownEnv(String),
    /// `BIND_ADDR` could not be parsed as a socket address.
    #[error("invalid BIND_ADDR: {0}")]
    InvalidBindAddr(String),
}

/// Configuration read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment.
    pub env: AppEnv,
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Database connection string; `None` leaves the user store disconnected.
    pub database_url: Option<String>,
    /// Seed demo users at startup.
    pub seed_demo_data: bool,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = match std::env::var("APP_ENV") {
            Ok(raw) => AppEnv::parse(&raw).ok_or_else(|| ConfigError::UnknownEnv(raw))?,
            Err(_) => AppEnv::default(),
        };

        let bind_addr = match std::env::var("BIND_ADDR") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr(raw))?,
            Err(_) => SocketAddr::from(([0, 0, 0, 0], 8080)),
        };

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|value| !value.is_empty());
        let seed_demo_data = std::env::var("SEED_DEMO_DATA").is_ok_and(|value| value == "1");

        Ok(Self {
            env,
            bind_addr,
            database_url,
            seed_demo_data,
        })
    }
}
