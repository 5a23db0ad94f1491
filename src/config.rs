//! @ai:module:intent Configuration structs for the comparison tool
//! @ai:module:layer infrastructure
//! @ai:module:public_api CompareConfig, ApiConfig, RunConfig, PathConfig, MAX_HANDLES
//! @ai:module:stateless true

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Hard upper bound on handles compared in one request.
pub const MAX_HANDLES: usize = 5;

/// @ai:intent Main configuration for the comparison tool
/// @ai:effects pure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompareConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub paths: PathConfig,
}

/// @ai:intent Settings for the submissions API client
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 1-based index of the first submission to request
    #[serde(default = "default_from")]
    pub from: u32,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// @ai:intent Settings for a comparison run
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default = "default_max_handles")]
    pub max_handles: usize,
}

/// @ai:intent Input/output locations
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfig {
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,
    /// Directory of saved dumps; when set, no network calls are made
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offline_dir: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            from: default_from(),
            count: default_count(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_handles: default_max_handles(),
        }
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            results_dir: default_results_dir(),
            offline_dir: None,
        }
    }
}

fn default_base_url() -> String {
    "https://codeforces.com/api".to_string()
}

fn default_from() -> u32 {
    1
}

fn default_count() -> u32 {
    9999
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_handles() -> usize {
    MAX_HANDLES
}

fn default_results_dir() -> PathBuf {
    PathBuf::from("results")
}

impl ApiConfig {
    /// @ai:intent Per-request timeout as a Duration
    /// @ai:effects pure
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

impl CompareConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @ai:intent Reject values the client or executor cannot work with
    /// @ai:effects pure
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_HANDLES).contains(&self.run.max_handles) {
            return Err(Error::InvalidConfig(format!(
                "run.max_handles must be between 1 and {}, got {}",
                MAX_HANDLES, self.run.max_handles
            )));
        }

        if self.api.base_url.trim().is_empty() {
            return Err(Error::InvalidConfig("api.base_url must not be empty".to_string()));
        }

        if self.api.from == 0 {
            return Err(Error::InvalidConfig("api.from is 1-based".to_string()));
        }

        if self.api.count == 0 {
            return Err(Error::InvalidConfig("api.count must be positive".to_string()));
        }

        Ok(())
    }
}
