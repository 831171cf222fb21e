use std::{fs::File, path::Path};

use reqwest::Url;
use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::CommitmentConfig;

use crate::{constants::*, error::ConfigurationError};

/// How deep a transaction must be confirmed before a call returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl From<Commitment> for CommitmentConfig {
    fn from(commitment: Commitment) -> Self {
        match commitment {
            Commitment::Processed => CommitmentConfig::processed(),
            Commitment::Confirmed => CommitmentConfig::confirmed(),
            Commitment::Finalized => CommitmentConfig::finalized(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    pub rpc_url: String,
    #[serde(default)]
    pub commitment: Commitment,
    #[serde(default = "default_rpc_timeout")]
    pub timeout_secs: u64,
}

impl LedgerConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        check_http_url("rpc", &self.rpc_url)?;
        if self.timeout_secs == 0 {
            return Err(ConfigurationError::InvalidTimeout("rpc"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub provider_url: String,
    /// Base url locators are built from when the provider returns only an id.
    #[serde(default)]
    pub gateway_url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_storage_timeout")]
    pub timeout_secs: u64,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.provider_url.trim().is_empty() {
            return Err(ConfigurationError::MissingProviderUrl);
        }
        check_http_url("storage provider", &self.provider_url)?;
        if let Some(ref gateway) = self.gateway_url {
            check_http_url("storage gateway", gateway)?;
        }
        if self.timeout_secs == 0 {
            return Err(ConfigurationError::InvalidTimeout("storage"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub ledger: LedgerConfig,
    pub storage: StorageConfig,
    /// Probe the ledger endpoint when the session is opened.
    #[serde(default)]
    pub verify_connection: bool,
}

impl SessionConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigurationError> {
        let f = File::open(path).map_err(|e| ConfigurationError::Read(e.to_string()))?;
        let config: SessionConfig =
            serde_json::from_reader(f).map_err(|e| ConfigurationError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.ledger.validate()?;
        self.storage.validate()
    }
}

fn check_http_url(field: &'static str, url: &str) -> Result<(), ConfigurationError> {
    let invalid = |reason: String| ConfigurationError::InvalidUrl {
        field,
        url: url.to_string(),
        reason,
    };

    let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(format!("unsupported scheme {scheme}"))),
    }
}

fn default_rpc_timeout() -> u64 {
    DEFAULT_RPC_TIMEOUT_SECS
}

fn default_storage_timeout() -> u64 {
    DEFAULT_STORAGE_TIMEOUT_SECS
}
