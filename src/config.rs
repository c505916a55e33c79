use anyhow::{anyhow, Result};
use serde_derive::Deserialize;
use std::str::FromStr;

pub const DEFAULT_SOLAREDGE_URL: &str = "https://monitoringapi.solaredge.com";

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    pub fn log_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.as_str()).unwrap_or(tracing::Level::INFO)
    }
}

pub(crate) fn load_app_config() -> Result<AppConfig> {
    match envy::from_env::<AppConfig>() {
        Ok(config) => Ok(config),
        Err(err) => Err(anyhow!("Failed to load AppConfig: {}", err)),
    }
}

fn default_solaredge_url() -> String {
    DEFAULT_SOLAREDGE_URL.to_string()
}

#[derive(Deserialize, Debug, Clone)]
pub struct SolarEdgeConfig {
    #[serde(default = "default_solaredge_url")]
    pub url: String,
    // unset means no client-side limit on a single request
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

pub(crate) fn load_solaredge_config() -> Result<SolarEdgeConfig> {
    match envy::prefixed("SOLAREDGE_").from_env::<SolarEdgeConfig>() {
        Ok(config) => Ok(config),
        Err(err) => Err(anyhow!("Failed to load SolarEdgeConfig: {}", err)),
    }
}
