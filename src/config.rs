// src/config.rs
use std::net::{IpAddr, Ipv4Addr};

use tracing::warn;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://ecommerce.db";
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_PORT: u16 = 5000;

/// Runtime settings, read from the process environment (and `.env`).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    /// Empty means any origin is allowed.
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let host = match lookup("HOST") {
            Some(raw) => raw.trim().parse::<IpAddr>().unwrap_or_else(|_| {
                warn!(host = %raw, "Invalid HOST, falling back to {}", DEFAULT_HOST);
                DEFAULT_HOST
            }),
            None => DEFAULT_HOST,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                warn!(port = %raw, "Invalid PORT, falling back to {}", DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Self { database_url, host, port, cors_allowed_origins }
    }
}
