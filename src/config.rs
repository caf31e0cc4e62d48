use crate::error::AppError;
use crate::filesystem;
use crate::models::ScanMode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable overriding the configured backend URL
pub const API_BASE_ENV: &str = "ECOLIFE_API_BASE";

const DEFAULT_API_BASE: &str = "http://127.0.0.1:5500";

/// Backend connection settings, read from `ecolife.toml`
///
/// ```toml
/// api_base = "http://192.168.1.20:5500"
/// classify_timeout_secs = 15
/// default_mode = "simple"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub api_base: String,
    pub classify_timeout_secs: u64,
    pub product_timeout_secs: u64,
    pub profile_timeout_secs: u64,
    pub health_timeout_secs: u64,
    pub auth_timeout_secs: u64,
    pub default_mode: ScanMode,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            classify_timeout_secs: 15,
            product_timeout_secs: 20,
            profile_timeout_secs: 10,
            health_timeout_secs: 5,
            auth_timeout_secs: 15,
            default_mode: ScanMode::Advanced,
        }
    }
}

impl ApiConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, AppError> {
        let config: ApiConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces the base URL when the override is set and non-empty
    pub fn with_api_base_override(mut self, api_base: Option<String>) -> Self {
        if let Some(base) = api_base.filter(|b| !b.trim().is_empty()) {
            log::info!("Using backend URL from {}: {}", API_BASE_ENV, base);
            self.api_base = base.trim().to_string();
        }
        self
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "api_base must be an http(s) URL, got '{}'",
                self.api_base
            )));
        }
        let timeouts = [
            self.classify_timeout_secs,
            self.product_timeout_secs,
            self.profile_timeout_secs,
            self.health_timeout_secs,
            self.auth_timeout_secs,
        ];
        if timeouts.iter().any(|t| *t == 0) {
            return Err(AppError::Config("timeouts must be at least 1s".to_string()));
        }
        Ok(())
    }

    pub fn classify_timeout(&self) -> Duration {
        Duration::from_secs(self.classify_timeout_secs)
    }

    pub fn product_timeout(&self) -> Duration {
        Duration::from_secs(self.product_timeout_secs)
    }

    pub fn profile_timeout(&self) -> Duration {
        Duration::from_secs(self.profile_timeout_secs)
    }

    pub fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout_secs)
    }

    pub fn auth_timeout(&self) -> Duration {
        Duration::from_secs(self.auth_timeout_secs)
    }
}

/// Reads the config file at `path`, falling back to defaults when it is missing
pub fn load_config_from(path: &Path) -> Result<ApiConfig, AppError> {
    if !path.exists() {
        log::debug!("No config file at {:?}, using defaults", path);
        return Ok(ApiConfig::default());
    }
    let raw = std::fs::read_to_string(path)?;
    ApiConfig::from_toml_str(&raw)
}

/// Loads the app configuration, applying the environment override
///
/// A broken config file is logged and replaced by defaults so the app still starts.
pub fn load_config() -> ApiConfig {
    let path = filesystem::config_file_path();
    let config = match load_config_from(&path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring config file {:?}: {}", path, e);
            ApiConfig::default()
        }
    };
    config.with_api_base_override(std::env::var(API_BASE_ENV).ok())
}
