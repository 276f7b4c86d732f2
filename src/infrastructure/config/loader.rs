use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Project config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "agenda.yaml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "AGENDA_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid repository: {0:?}. Must be of the form owner/name")]
    InvalidRepository(String),

    #[error("GitHub API URL cannot be empty")]
    EmptyApiUrl,

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("Invalid per_page: {0}. Must be between 1 and 100")]
    InvalidPerPage(u8),

    #[error("Invalid lookback_days: {0}. Must be at least 1")]
    InvalidLookback(u32),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: compact, pretty, json")]
    InvalidLogFormat(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `agenda.yaml` in the working directory (optional)
    /// 3. The explicitly given config file (optional)
    /// 4. Environment variables (`AGENDA_*` prefix, `__` separates nested keys)
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(DEFAULT_CONFIG_FILE));

        if let Some(path) = explicit {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        let config: Config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, without environment overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let repository = &config.github.repository;
        let valid_repository = matches!(
            repository.split_once('/'),
            Some((owner, name)) if !owner.trim().is_empty()
                && !name.trim().is_empty()
                && !name.contains('/')
                && !repository.contains(char::is_whitespace)
        );
        if !valid_repository {
            return Err(ConfigError::InvalidRepository(repository.clone()));
        }

        if config.github.api_url.trim().is_empty() {
            return Err(ConfigError::EmptyApiUrl);
        }

        if config.github.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.github.timeout_secs));
        }

        if config.github.per_page == 0 || config.github.per_page > 100 {
            return Err(ConfigError::InvalidPerPage(config.github.per_page));
        }

        if config.report.lookback_days == 0 {
            return Err(ConfigError::InvalidLookback(config.report.lookback_days));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["compact", "pretty", "json"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.github.repository, "eos/eos");
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert_eq!(config.github.per_page, 100);
        assert_eq!(config.report.lookback_days, 14);
        assert_eq!(config.report.output_dir, std::path::PathBuf::from("."));
        assert_eq!(config.logging.level, "info");
        ConfigLoader::validate(&config).expect("Default config should be valid");
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r"
github:
  repository: eos/eos-data
  per_page: 50
report:
  output_dir: /tmp/agendas
  lookback_days: 7
logging:
  level: debug
  format: json
";

        let config: Config = serde_yaml::from_str(yaml).expect("YAML should parse");

        assert_eq!(config.github.repository, "eos/eos-data");
        assert_eq!(config.github.per_page, 50);
        assert_eq!(config.github.timeout_secs, 30);
        assert_eq!(config.report.output_dir, std::path::PathBuf::from("/tmp/agendas"));
        assert_eq!(config.report.lookback_days, 7);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");

        ConfigLoader::validate(&config).expect("Parsed config should be valid");
    }

    #[test]
    fn test_validate_repository() {
        for bad in ["", "eos", "/eos", "eos/", "eos/eos/extra", "eos /eos"] {
            let mut config = Config::default();
            config.github.repository = bad.to_string();
            assert!(
                matches!(
                    ConfigLoader::validate(&config),
                    Err(ConfigError::InvalidRepository(_))
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_empty_api_url() {
        let mut config = Config::default();
        config.github.api_url = "  ".to_string();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::EmptyApiUrl)
        ));
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = Config::default();
        config.github.timeout_secs = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidTimeout(0))
        ));
    }

    #[test]
    fn test_validate_per_page_bounds() {
        let mut config = Config::default();
        config.github.per_page = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidPerPage(0))
        ));

        config.github.per_page = 101;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidPerPage(101))
        ));
    }

    #[test]
    fn test_validate_zero_lookback() {
        let mut config = Config::default();
        config.report.lookback_days = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLookback(0))
        ));
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "invalid".to_string();

        match ConfigLoader::validate(&config).unwrap_err() {
            ConfigError::InvalidLogLevel(level) => assert_eq!(level, "invalid"),
            other => panic!("Expected InvalidLogLevel error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_invalid_log_format() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();

        match ConfigLoader::validate(&config).unwrap_err() {
            ConfigError::InvalidLogFormat(format) => assert_eq!(format, "xml"),
            other => panic!("Expected InvalidLogFormat error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "github:\n  repository: someone/else\nreport:\n  lookback_days: 21").unwrap();
        file.flush().unwrap();

        let config = ConfigLoader::load_from_file(file.path()).unwrap();
        assert_eq!(config.github.repository, "someone/else");
        assert_eq!(config.report.lookback_days, 21);
        assert_eq!(config.github.per_page, 100, "unset fields keep defaults");
    }

    #[test]
    fn test_load_from_file_rejects_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "github:\n  per_page: 0").unwrap();
        file.flush().unwrap();

        assert!(ConfigLoader::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_env_override() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "github:\n  repository: from/file\nlogging:\n  level: warn").unwrap();
        file.flush().unwrap();

        temp_env::with_vars(
            [
                ("AGENDA_GITHUB__REPOSITORY", Some("from/env")),
                ("AGENDA_REPORT__LOOKBACK_DAYS", Some("28")),
            ],
            || {
                let config = ConfigLoader::load(Some(file.path())).unwrap();
                assert_eq!(config.github.repository, "from/env", "env should win over file");
                assert_eq!(config.report.lookback_days, 28);
                assert_eq!(config.logging.level, "warn", "file value should persist");
            },
        );
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = ConfigLoader::load(Some(Path::new("/nonexistent/agenda-config.yaml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_hierarchical_merging() {
        let mut base_file = NamedTempFile::new().unwrap();
        writeln!(
            base_file,
            "github:\n  repository: eos/eos\n  per_page: 30\nlogging:\n  level: info\n  format: json"
        )
        .unwrap();
        base_file.flush().unwrap();

        let mut override_file = NamedTempFile::new().unwrap();
        writeln!(override_file, "github:\n  per_page: 60\nlogging:\n  level: debug").unwrap();
        override_file.flush().unwrap();

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(base_file.path()))
            .merge(Yaml::file(override_file.path()))
            .extract()
            .unwrap();

        assert_eq!(config.github.per_page, 60, "Override should win");
        assert_eq!(
            config.logging.level, "debug",
            "Override should win for nested fields"
        );
        assert_eq!(
            config.logging.format, "json",
            "Base value should persist when not overridden"
        );
        assert_eq!(config.github.repository, "eos/eos");
    }
}
