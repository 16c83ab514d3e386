//! Application configuration

use std::collections::HashMap;
use std::path::PathBuf;

use config::{Config, ConfigError, Environment};
use infra_files::StorageConfig;
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Directory holding the customer CSV files
    pub data_dir: PathBuf,
    /// Directory receiving reports
    pub reports_dir: PathBuf,
    /// Directory holding the audit log
    pub logs_dir: PathBuf,
    /// Log level or `EnvFilter` directive for diagnostics
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("datos"),
            reports_dir: PathBuf::from("reportes"),
            logs_dir: PathBuf::from("logs"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from `GIC_*` environment variables over the defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix("GIC"))
    }

    /// Loads configuration from an explicit variable map instead of the process environment
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix("GIC").source(Some(vars)))
    }

    fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Config::builder()
            .set_default("data_dir", defaults.data_dir.to_string_lossy().into_owned())?
            .set_default("reports_dir", defaults.reports_dir.to_string_lossy().into_owned())?
            .set_default("logs_dir", defaults.logs_dir.to_string_lossy().into_owned())?
            .set_default("log_level", defaults.log_level)?
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// Storage locations derived from the configured directories
    pub fn storage(&self) -> StorageConfig {
        StorageConfig::new(&self.data_dir, &self.reports_dir, &self.logs_dir)
    }
}
