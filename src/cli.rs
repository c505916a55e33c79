use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use crate::error::ConfigError;

#[derive(Parser, Debug)]
#[command(name = "solaredge-csv-export")]
#[command(about = "Pull SolarEdge site energy data into CSV", long_about = None)]
pub struct Cli {
    /// Site id (integer)
    #[arg(long)]
    pub site: Option<u64>,

    /// Access key (string of 32 digits and upper case letters)
    #[arg(long)]
    pub key: Option<String>,

    /// Name of output CSV file; standard output when omitted
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Validated invocation parameters for one export.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub site_id: u64,
    pub api_key: String,
    pub out: Option<PathBuf>,
}

impl Cli {
    /// Checks the required flags before anything touches the network.
    pub fn into_export_config(self) -> Result<ExportConfig, ConfigError> {
        let (site_id, api_key) = match (self.site, self.key) {
            (Some(site), Some(key)) => (site, key),
            (None, Some(_)) => return Err(ConfigError::missing("--site")),
            (Some(_), None) => return Err(ConfigError::missing("--key")),
            (None, None) => return Err(ConfigError::missing("--site and --key")),
        };

        if site_id == 0 {
            return Err(ConfigError::invalid("--site", "must be a positive integer"));
        }
        let api_key = api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(ConfigError::invalid("--key", "must not be empty"));
        }

        Ok(ExportConfig {
            site_id,
            api_key,
            out: self.out,
        })
    }

    /// Renders an invocation error the way clap reports its own, with the
    /// usage line appended.
    pub fn usage_error(err: &ConfigError) -> clap::Error {
        let kind = match err {
            ConfigError::Missing(_) => ErrorKind::MissingRequiredArgument,
            ConfigError::Invalid { .. } => ErrorKind::ValueValidation,
        };
        Cli::command().error(kind, err)
    }
}
