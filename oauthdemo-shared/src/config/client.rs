use serde::{Deserialize, Serialize};
use std::{
    env, fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;

use crate::endpoints::Endpoints;

/// Environment variable holding the backend origin.
pub const API_URL_ENV: &str = "OAUTHDEMO_API_URL";
/// Environment variable holding the default log level.
pub const LOG_LEVEL_ENV: &str = "OAUTHDEMO_LOG_LEVEL";
/// Environment variable selecting `text` or `json` log output.
pub const LOG_FORMAT_ENV: &str = "OAUTHDEMO_LOG_FORMAT";

/// Errors raised while loading or writing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("unsupported configuration format '{0}'. Use 'yaml', 'json', or 'toml'.")]
    UnsupportedFormat(String),

    #[error("invalid {name} value '{value}'")]
    InvalidValue { name: &'static str, value: String },

    #[error("failed to serialize configuration: {0}")]
    Serialize(String),
}

/// Output format for log lines.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue {
                name: LOG_FORMAT_ENV,
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

/// Logging settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG` when set.
    pub level: String,

    /// Line format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

/// Configuration shared by the OAuthDemo front-ends.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Backend origin. Scheme and trailing slashes are optional; leaving it
    /// unset keeps requests on the page's own origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Logging settings.
    pub logging: LoggingConfig,
}

impl Config {
    /// Generates a default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Loads the configuration from a file, environment variables, or defaults.
    ///
    /// # Arguments
    /// * `config_path` - Optional path to a `.yaml`, `.yml`, `.json`, or `.toml` file.
    /// * `api_url_override` - Optional backend origin taking precedence over everything else.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, has an unknown
    /// extension, or an environment variable holds an invalid value.
    pub fn load_config(
        config_path: Option<&Path>,
        api_url_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::with_defaults(),
        };

        config.apply_env_overrides()?;

        if let Some(api_url) = api_url_override.filter(|url| !url.trim().is_empty()) {
            config.api_url = Some(api_url);
        }

        Ok(config)
    }

    /// Reads a configuration file, choosing the parser from its extension.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or has an unknown extension.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let parse_error = |message: String| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        };

        match extension(path).as_str() {
            "yaml" | "yml" => serde_yml::from_str(&content).map_err(|e| parse_error(e.to_string())),
            "json" => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string())),
            "toml" => toml::from_str(&content).map_err(|e| parse_error(e.to_string())),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Serializes the configuration as `yaml`, `json`, or `toml`.
    ///
    /// # Errors
    /// Returns an error for an unknown format or if serialization fails.
    pub fn render(&self, format: &str) -> Result<String, ConfigError> {
        match format {
            "yaml" | "yml" => {
                serde_yml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))
            }
            "json" => serde_json::to_string_pretty(self)
                .map_err(|e| ConfigError::Serialize(e.to_string())),
            "toml" => toml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string())),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Backend routes derived from [`Config::api_url`].
    #[must_use]
    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(self.api_url.as_deref())
    }

    // Environment variables only fill values the file left at their defaults.
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        let defaults = Self::with_defaults();

        if self.api_url.is_none() {
            if let Some(api_url) = non_empty_env(API_URL_ENV) {
                self.api_url = Some(api_url);
            }
        }
        if self.logging.level == defaults.logging.level {
            if let Some(level) = non_empty_env(LOG_LEVEL_ENV) {
                self.logging.level = level;
            }
        }
        if self.logging.format == defaults.logging.format {
            if let Some(format) = non_empty_env(LOG_FORMAT_ENV) {
                self.logging.format = format.parse()?;
            }
        }

        Ok(())
    }
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase()
}

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
