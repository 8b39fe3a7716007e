//! Configuration loading utilities

use crate::Config;
use pandemic_common::{PandemicError, Result as PandemicResult};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_VAR: &str = "PANDEMIC_CONFIG_PATH";

/// Files probed in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILES: [&str; 3] = ["pandemic.yaml", "pandemic.yml", "pandemic.toml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    /// The file extension does not name a supported format
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Variable name
        var: String,
        /// Parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for PandemicError {
    fn from(err: ConfigError) -> Self {
        PandemicError::config_with_source("Configuration loading failed", err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML or TOML file, chosen by extension,
    /// with environment variable overrides applied.
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let mut config = Self::parse_file(path.as_ref())?;
        Self::apply_env_overrides(&mut config)?;
        Ok(config)
    }

    /// Load configuration from environment variables and files, then validate.
    pub fn load() -> PandemicResult<Config> {
        let config = match Self::locate(env::var(CONFIG_PATH_VAR).ok()) {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                Self::load_config(&path)?
            }
            None => {
                debug!("No configuration file found, using defaults");
                let mut config = Config::default();
                Self::apply_env_overrides(&mut config)?;
                config
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PandemicResult<Config> {
        let config = Self::load_config(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Picks the explicit path if given, else the first default file present.
    fn locate(explicit: Option<String>) -> Option<PathBuf> {
        explicit.map(PathBuf::from).or_else(|| {
            DEFAULT_CONFIG_FILES
                .iter()
                .map(PathBuf::from)
                .find(|candidate| candidate.exists())
        })
    }

    /// Parse a file without applying overrides.
    pub fn parse_file(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("yaml" | "yml") => Ok(serde_yaml::from_str(&content)?),
            Some("toml") => Ok(toml::from_str(&content)?),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides_from(config, |name| env::var(name).ok())
    }

    /// Apply overrides looked up through `lookup`, one variable at a time.
    pub fn apply_overrides_from<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("PANDEMIC_CONFIRMED_URL") {
            config.sources.confirmed = url;
        }

        if let Some(url) = lookup("PANDEMIC_DEATHS_URL") {
            config.sources.deaths = url;
        }

        if let Some(url) = lookup("PANDEMIC_RECOVERED_URL") {
            config.sources.recovered = url;
        }

        if let Some(timeout) = lookup("PANDEMIC_TIMEOUT") {
            config.sources.timeout_seconds =
                timeout.trim().parse().map_err(|e| ConfigError::EnvParseError {
                    var: "PANDEMIC_TIMEOUT".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Some(countries) = lookup("PANDEMIC_COUNTRIES") {
            config.selection.countries = countries
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            config.selection.include_world = config.selection.countries.is_empty();
        }

        if let Some(dir) = lookup("PANDEMIC_OUTPUT_DIR") {
            config.output.directory = PathBuf::from(dir);
        }

        if let Some(level) = lookup("PANDEMIC_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}
