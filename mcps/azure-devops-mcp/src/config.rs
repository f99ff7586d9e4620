//! Configuration loading for azure-devops-mcp
//!
//! Configuration is loaded from:
//! 1. Environment variables AZURE_DEVOPS_ORG_URL, AZURE_DEVOPS_PAT,
//!    AZURE_DEVOPS_API_VERSION
//! 2. Environment variable AZURE_DEVOPS_CONFIG_PATH
//! 3. ~/.binks/azure-devops.toml
//! 4. Default values

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Organization connection settings
    #[serde(default)]
    pub azure_devops: AzureDevOpsConfig,
}

/// Azure DevOps organization connection
#[derive(Clone, Serialize, Deserialize)]
pub struct AzureDevOpsConfig {
    /// e.g. https://dev.azure.com/my-org
    #[serde(default)]
    pub organization_url: String,
    /// Personal access token; never logged
    #[serde(default)]
    pub personal_access_token: String,
    /// REST api-version sent with every request
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Per-request timeout
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_api_version() -> String {
    "7.1".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("azure-devops-mcp/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for AzureDevOpsConfig {
    fn default() -> Self {
        Self {
            organization_url: String::new(),
            personal_access_token: String::new(),
            api_version: default_api_version(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

impl fmt::Debug for AzureDevOpsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.personal_access_token.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };
        f.debug_struct("AzureDevOpsConfig")
            .field("organization_url", &self.organization_url)
            .field("personal_access_token", &token)
            .field("api_version", &self.api_version)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Config {
    /// Load configuration from file or use defaults, then apply env overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::find_config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            Some(_) => {
                tracing::info!("Config file not found, using defaults");
                Self::default()
            }
            None => {
                tracing::info!("No config path specified, using defaults");
                Self::default()
            }
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::info!("Loading config from: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Environment variables take precedence over the file
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let ado = &mut self.azure_devops;
        if let Some(url) = lookup("AZURE_DEVOPS_ORG_URL") {
            ado.organization_url = url;
        }
        if let Some(pat) = lookup("AZURE_DEVOPS_PAT") {
            ado.personal_access_token = pat;
        }
        if let Some(version) = lookup("AZURE_DEVOPS_API_VERSION") {
            ado.api_version = version;
        }
    }

    /// Find the configuration file path
    fn find_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("AZURE_DEVOPS_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        if let Ok(home) = std::env::var("HOME") {
            return Some(PathBuf::from(home).join(".binks").join("azure-devops.toml"));
        }

        None
    }
}
