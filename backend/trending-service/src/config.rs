/// Configuration management for Trending Service
///
/// All settings come from environment variables, loaded once at startup.
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub video_host: VideoHostConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoHostConfig {
    pub url: String,
    #[serde(default = "default_host_timeout_secs")]
    pub timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            app: AppConfig {
                env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                port: parse_var("APP_PORT", 8000)?,
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .map_err(|_| AppError::Config("DATABASE_URL is not set".to_string()))?,
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS", 10)?,
            },
            video_host: VideoHostConfig {
                url: std::env::var("VIDEO_HOST_URL")
                    .unwrap_or_else(|_| "http://127.0.0.1:50053".to_string()),
                timeout_secs: parse_var("VIDEO_HOST_TIMEOUT_SECS", default_host_timeout_secs())?,
            },
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::Config(format!("invalid value for {}: {}", name, raw))),
        Err(_) => Ok(default),
    }
}

fn default_host_timeout_secs() -> u64 {
    30
}
