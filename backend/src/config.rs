//! Configuration management for the Rx Burn Weather Planner
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with RXB_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    pub server: ServerConfig,

    pub database: DatabaseConfig,

    /// National Weather Service API
    pub nws: NwsConfig,

    /// Reverse geocoding for location labels
    pub geocoding: GeocodingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NwsConfig {
    pub api_endpoint: String,

    /// NWS rejects requests without an identifying User-Agent
    pub user_agent: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeocodingConfig {
    pub api_endpoint: String,
    pub user_agent: String,
    pub enabled: bool,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("RXB_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("nws.api_endpoint", "https://api.weather.gov")?
            .set_default("nws.user_agent", "rx-burn-weather-planner")?
            .set_default("geocoding.api_endpoint", "https://nominatim.openstreetmap.org")?
            .set_default("geocoding.user_agent", "rx-burn-weather-planner")?
            .set_default("geocoding.enabled", true)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (RXB_ prefix)
            .add_source(
                Environment::with_prefix("RXB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
