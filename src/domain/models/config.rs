use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::window::DEFAULT_LOOKBACK_DAYS;

/// Main configuration structure for the agenda generator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// GitHub search configuration
    #[serde(default)]
    pub github: GithubConfig,

    /// Report output configuration
    #[serde(default)]
    pub report: ReportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// GitHub search configuration
///
/// The access token is not part of the config; it is only read from the
/// environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GithubConfig {
    /// Repository the searches are scoped to, as `owner/name`
    #[serde(default = "default_repository")]
    pub repository: String,

    /// Base URL of the REST API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Results requested per search (single page, 1-100)
    #[serde(default = "default_per_page")]
    pub per_page: u8,
}

fn default_repository() -> String {
    "eos/eos".to_string()
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_per_page() -> u8 {
    100
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            repository: default_repository(),
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            per_page: default_per_page(),
        }
    }
}

/// Report output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ReportConfig {
    /// Directory the agenda file is written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Number of days the date window reaches back
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

const fn default_lookback_days() -> u32 {
    DEFAULT_LOOKBACK_DAYS
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            lookback_days: default_lookback_days(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: compact, pretty or json
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for daily-rotated JSON log files (stderr only when unset)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
        }
    }
}
