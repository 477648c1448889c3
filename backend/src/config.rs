//! Configuration management for the garden planner server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with HORTA_ prefix

use chrono::Weekday;
use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Calendar policy configuration
    pub planning: PlanningConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
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

    /// Seconds to wait for a pooled connection
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlanningConfig {
    /// First day of the week used for "this week" task lists
    pub week_start: String,
}

impl PlanningConfig {
    /// Parsed week start day
    pub fn week_start_day(&self) -> Result<Weekday, ConfigError> {
        self.week_start.parse::<Weekday>().map_err(|_| {
            ConfigError::Message(format!("Invalid planning.week_start: {}", self.week_start))
        })
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("HORTA_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 8000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("database.acquire_timeout_secs", 30)?
            .set_default("planning.week_start", "monday")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (HORTA_ prefix)
            .add_source(
                Environment::with_prefix("HORTA")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.planning.week_start_day()?;
        Ok(config)
    }

    /// Address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_start_parsing() {
        let planning = PlanningConfig {
            week_start: "monday".to_string(),
        };
        assert_eq!(planning.week_start_day().unwrap(), Weekday::Mon);

        let planning = PlanningConfig {
            week_start: "Sun".to_string(),
        };
        assert_eq!(planning.week_start_day().unwrap(), Weekday::Sun);
    }

    #[test]
    fn test_week_start_rejects_unknown_day() {
        let planning = PlanningConfig {
            week_start: "someday".to_string(),
        };
        assert!(planning.week_start_day().is_err());
    }

    #[test]
    fn test_bind_address() {
        let config = Config {
            environment: "test".to_string(),
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url: "postgres://localhost/horta".to_string(),
                max_connections: 5,
                min_connections: 1,
                acquire_timeout_secs: 5,
            },
            planning: PlanningConfig {
                week_start: "monday".to_string(),
            },
        };
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
    }
}
