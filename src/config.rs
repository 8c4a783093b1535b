//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default profile service address
pub const DEFAULT_ADDRESS: &str = "http://127.0.0.1:50061";

/// Environment variable overriding the service address
pub const ADDRESS_ENV: &str = "CORAL_PROFILE_ADDRESS";

/// Environment variable overriding the access token
pub const TOKEN_ENV: &str = "CORAL_ACCESS_TOKEN";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Profile service address
    pub service_address: Option<String>,
    /// Bearer token for the signed-in user
    pub access_token: Option<String>,
    /// Force member bios on or off regardless of the site setting
    pub member_bios: Option<bool>,
    /// Where to write logs
    pub log_file: Option<PathBuf>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "coral", "coral-bio")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Service address: environment, then config file, then the default
    pub fn resolved_service_address(&self) -> String {
        std::env::var(ADDRESS_ENV)
            .ok()
            .or_else(|| self.service_address.clone())
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string())
    }

    /// Access token: environment, then config file
    pub fn resolved_access_token(&self) -> Option<String> {
        std::env::var(TOKEN_ENV)
            .ok()
            .or_else(|| self.access_token.clone())
            .filter(|token| !token.is_empty())
    }

    /// Log file location, defaulting to the platform data dir
    pub fn resolved_log_file(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            Self::project_dirs().map(|dirs| dirs.data_local_dir().join("coral-bio.log"))
        })
    }
}
