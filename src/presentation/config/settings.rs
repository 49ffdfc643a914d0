use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use super::Environment;
use crate::application::services::{DEFAULT_PROBE_TIMEOUT, DEFAULT_RECENT_LOG_LIMIT};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub pipelines: PipelineSettings,
    pub logs: LogsSettings,
    pub system: SystemSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Supplied through `APP_DATABASE__URL`; never checked in.
    pub url: Option<String>,
    pub probe_timeout_secs: u64,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineSettings {
    pub working_dir: PathBuf,
    pub interpreter: Option<String>,
    pub single_flight_per_kind: bool,
    pub scripts: PipelineScriptSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineScriptSettings {
    pub daily: PathBuf,
    pub weekly_training: PathBuf,
    pub monthly_training: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogsSettings {
    pub root: PathBuf,
    /// Subdirectory of `root` receiving captured pipeline output.
    pub pipeline_dir: String,
    pub recent_limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SystemSettings {
    pub disk_path: PathBuf,
    pub cpu_sample_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Defaults, then `appsettings.<env>.toml` if present, then `APP_*` variables
    /// (`__` separates nesting, e.g. `APP_SERVER__PORT`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("database.probe_timeout_secs", DEFAULT_PROBE_TIMEOUT.as_secs())?
            .set_default("database.max_connections", 2)?
            .set_default("pipelines.working_dir", ".")?
            .set_default("pipelines.single_flight_per_kind", false)?
            .set_default("pipelines.scripts.daily", "scripts/run_daily_pipeline.sh")?
            .set_default(
                "pipelines.scripts.weekly_training",
                "scripts/run_weekly_training.sh",
            )?
            .set_default(
                "pipelines.scripts.monthly_training",
                "scripts/run_monthly_training.sh",
            )?
            .set_default("logs.root", "logs")?
            .set_default("logs.pipeline_dir", "pipelines")?
            .set_default("logs.recent_limit", DEFAULT_RECENT_LOG_LIMIT as u64)?
            .set_default("system.disk_path", "/")?
            .set_default("system.cpu_sample_ms", 200)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}

impl DatabaseSettings {
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}

impl SystemSettings {
    pub fn cpu_sample_interval(&self) -> Duration {
        Duration::from_millis(self.cpu_sample_ms)
    }
}

impl std::fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("url", &self.url.as_ref().map(|_| "[REDACTED]"))
            .field("probe_timeout_secs", &self.probe_timeout_secs)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}
