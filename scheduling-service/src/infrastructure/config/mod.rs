use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::domain::solver::DriverConfig;

/// Layered application configuration: `config/default.toml`, an optional
/// `config/{RUN_ENV}.toml` on top of it, then `APP__`-prefixed environment
/// overrides. Mirrors the `Settings`/`Config::builder()` convention this
/// codebase's services already use.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub solver: SolverSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Resource budget for a single solve call, loaded from configuration.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct SolverSettings {
    pub max_time_in_seconds: u64,
    pub num_search_workers: usize,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("solver.max_time_in_seconds", 30)?
            .set_default("solver.num_search_workers", 8)?
            .build()?;

        config.try_deserialize()
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl From<SolverSettings> for DriverConfig {
    fn from(settings: SolverSettings) -> Self {
        DriverConfig {
            time_limit: Duration::from_secs(settings.max_time_in_seconds),
            num_search_workers: settings.num_search_workers,
        }
    }
}
