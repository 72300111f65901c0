// src/config.rs

use std::env;
use dotenvy::dotenv;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://db.sqlite?mode=rwc";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub port: u16,
    /// Exposes `POST /reset`, which wipes every stored assessment.
    pub enable_reset: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            rust_log: "info".to_string(),
            port: DEFAULT_PORT,
            enable_reset: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let enable_reset = env::var("ENABLE_RESET")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        Self {
            database_url,
            rust_log,
            port,
            enable_reset,
        }
    }
}
