//! Centralized configuration management for courtfinder

use std::path::PathBuf;
use std::time::Duration;
use anyhow::{Result, Context};

const DEFAULT_DATA_URL: &str = "https://www.nycgovparks.org/bigapps/DPR_Tennis_001.csv";
const DEFAULT_CACHE_PATH: &str = "./courts.csv";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Location of the court dataset (URL or local path)
    pub data_url: String,
    /// Default path for locally cached dataset copies
    pub cache_path: PathBuf,
    /// HTTP client configuration
    pub http: HttpConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: "courtfinder/0.1.0".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            cache_path: DEFAULT_CACHE_PATH.into(),
            http: HttpConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables and defaults
    pub fn from_env() -> Result<Self> {
        let data_url = std::env::var("COURTFINDER_DATA_URL")
            .unwrap_or_else(|_| DEFAULT_DATA_URL.to_string());

        let cache_path = std::env::var("COURTFINDER_CACHE_PATH")
            .unwrap_or_else(|_| DEFAULT_CACHE_PATH.to_string())
            .into();

        let http = HttpConfig {
            timeout_seconds: parse_env_var("COURTFINDER_HTTP_TIMEOUT_SECONDS")?.unwrap_or(30),
            user_agent: std::env::var("COURTFINDER_USER_AGENT")
                .unwrap_or_else(|_| "courtfinder/0.1.0".to_string()),
        };

        Ok(Config {
            data_url,
            cache_path,
            http,
        })
    }

    /// Get cache path as string
    pub fn cache_path_str(&self) -> &str {
        self.cache_path.to_str().unwrap_or(DEFAULT_CACHE_PATH)
    }

    /// Get HTTP timeout as Duration
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_seconds)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.data_url.trim().is_empty() {
            return Err(anyhow::anyhow!("Data URL must not be empty"));
        }

        // Check if parent directory of the cache path exists
        if let Some(parent) = self.cache_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(anyhow::anyhow!(
                    "Cache parent directory does not exist: {}",
                    parent.display()
                ));
            }
        }

        Ok(())
    }
}

/// Helper function to parse environment variable as a specific type
fn parse_env_var<T>(var_name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display + Send + Sync + std::error::Error + 'static,
{
    match std::env::var(var_name) {
        Ok(val) => val.parse().map(Some).with_context(|| {
            format!("Failed to parse environment variable {} = '{}'", var_name, val)
        }),
        Err(_) => Ok(None),
    }
}
