//! CLI Configuration

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use netaccess_core::{
    FileSettings, NetworkAccess, NetworkAccessConfig, PublicParamsConfig, TrustStores,
};

/// Environment variables consulted when no config file is given.
const ZKGROUP_PARAMS_ENV: &str = "NETACCESS_ZKGROUP_PARAMS";
const GENERIC_PARAMS_ENV: &str = "NETACCESS_GENERIC_PARAMS";
const BACKUP_PARAMS_ENV: &str = "NETACCESS_BACKUP_PARAMS";

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Data directory for settings.
    pub data_dir: PathBuf,
    /// Optional network configuration file.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    /// Returns the settings file path.
    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join("settings.json")
    }

    /// Opens the persisted settings.
    pub fn settings(&self) -> FileSettings {
        FileSettings::new(self.settings_path())
    }

    /// Loads the network configuration from file, or production URLs with
    /// public params from the environment.
    pub fn network_config(&self) -> Result<NetworkAccessConfig> {
        if let Some(path) = &self.config_path {
            tracing::debug!(path = %path.display(), "loading network config");
            return NetworkAccessConfig::load(path)
                .with_context(|| format!("Failed to load {}", path.display()));
        }

        tracing::debug!("no config file, using production URLs");
        let var = |name: &str| {
            env::var(name).with_context(|| {
                format!("{} not set (or pass --config <file>)", name)
            })
        };

        Ok(NetworkAccessConfig::new(PublicParamsConfig {
            zkgroup: var(ZKGROUP_PARAMS_ENV)?,
            generic: var(GENERIC_PARAMS_ENV)?,
            backup: var(BACKUP_PARAMS_ENV)?,
        }))
    }

    /// Builds the selector.
    pub fn network_access(&self) -> Result<NetworkAccess> {
        let config = self.network_config()?;
        Ok(NetworkAccess::new(&config, TrustStores::default())?)
    }
}
