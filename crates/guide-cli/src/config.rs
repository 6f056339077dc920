use std::env;
use std::path::PathBuf;
use thiserror::Error;

use crate::args::CliArgs;

/// Runtime settings, read from the environment (and `.env`) and then
/// overridden by command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideConfig {
    /// `None` means the embedded dataset.
    pub data_path: Option<PathBuf>,
    pub map_dir: PathBuf,
    /// When set, map files are fetched over HTTP instead of read from `map_dir`.
    pub map_base_url: Option<String>,
    pub log_level: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GUIDE_MAP_BASE_URL is set but empty")]
    EmptyBaseUrl,
    #[error("GUIDE_MAP_BASE_URL must start with http:// or https:// (got '{0}')")]
    InvalidBaseUrl(String),
}

impl GuideConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key/value source. Blank paths count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_path = non_blank("GUIDE_DATA_PATH").map(PathBuf::from);
        let map_dir = non_blank("GUIDE_MAP_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(guide_core::Guide::default_map_dir);
        let log_level = non_blank("GUIDE_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let map_base_url = match lookup("GUIDE_MAP_BASE_URL") {
            None => None,
            Some(url) => Some(validate_base_url(url.trim())?),
        };

        Ok(Self {
            data_path,
            map_dir,
            map_base_url,
            log_level,
        })
    }

    pub fn apply_args(&mut self, args: &CliArgs) {
        if let Some(path) = &args.data {
            self.data_path = Some(path.clone());
        }
        if let Some(dir) = &args.maps {
            self.map_dir = dir.clone();
            // An explicit directory wins over a remote source.
            self.map_base_url = None;
        }
        if let Some(level) = &args.log_level {
            self.log_level = level.clone();
        }
    }
}

fn validate_base_url(url: &str) -> Result<String, ConfigError> {
    if url.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl(url.to_string()));
    }
    Ok(url.trim_end_matches('/').to_string())
}
