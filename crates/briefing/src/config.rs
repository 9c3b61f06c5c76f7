//! Configuration for upstream services
//!
//! The weather API key is read from the `WEATHER_API_KEY` environment
//! variable first and from a TOML file second:
//!
//! ```toml
//! [openweathermap]
//! api_key = "..."
//! country_code = "PL"   # optional, appended to the city query
//! base_url = "..."      # optional
//!
//! [jsonplaceholder]
//! base_url = "..."      # optional
//! ```
//!
//! A missing file is fine; a malformed one is an error.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable holding the weather API key
pub const WEATHER_API_KEY_ENV: &str = "WEATHER_API_KEY";

/// Section holding the weather service settings
pub const WEATHER_SERVICE: &str = "openweathermap";

/// Section holding the user directory settings
pub const DIRECTORY_SERVICE: &str = "jsonplaceholder";

/// Default configuration file, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "API key for service '{service}' not found in environment variable '{env_var}' nor in the '{path}' file."
    )]
    MissingApiKey {
        service: String,
        env_var: &'static str,
        path: String,
    },

    #[error("Service name must be a non-empty string")]
    InvalidServiceName,

    #[error("Failed to read config from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to initialise HTTP client: {0}")]
    HttpClient(String),
}

/// Settings of one upstream service section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceSection {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub country_code: Option<String>,
}

/// Known sections of the config file; other keys are ignored
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    openweathermap: Option<ServiceSection>,
    jsonplaceholder: Option<ServiceSection>,
}

/// Resolved configuration sources
#[derive(Debug, Clone)]
pub struct ConfigReader {
    path: PathBuf,
    env_api_key: Option<String>,
    file: ConfigFile,
}

impl ConfigReader {
    /// Load from the process environment and the file at `path`
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        Self::load_with_key(path, std::env::var(WEATHER_API_KEY_ENV).ok())
    }

    /// Load the file at `path`, with `api_key` standing in for the environment
    pub fn load_with_key(
        path: impl Into<PathBuf>,
        api_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        let path = path.into();

        let contents = if path.is_file() {
            let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                path: path.display().to_string(),
                source,
            })?;
            Some(contents)
        } else {
            tracing::debug!(path = %path.display(), "No config file, relying on environment");
            None
        };

        Self::from_sources(path, api_key, contents.as_deref())
    }

    /// Build from explicit sources without touching the environment or disk
    pub fn from_sources(
        path: impl Into<PathBuf>,
        env_api_key: Option<String>,
        contents: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let path = path.into();

        let file = match contents {
            Some(contents) => toml::from_str(contents).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?,
            None => ConfigFile::default(),
        };

        Ok(Self {
            path,
            env_api_key: env_api_key.filter(|key| !key.is_empty()),
            file,
        })
    }

    /// Path of the backing config file (it may not exist)
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve the API key for `service`: environment first, then file
    pub fn get_api_key(&self, service: &str) -> Result<String, ConfigError> {
        if service.trim().is_empty() {
            return Err(ConfigError::InvalidServiceName);
        }

        if let Some(key) = &self.env_api_key {
            return Ok(key.clone());
        }

        self.section(service)
            .and_then(|section| section.api_key.clone())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::MissingApiKey {
                service: service.to_string(),
                env_var: WEATHER_API_KEY_ENV,
                path: self.path.display().to_string(),
            })
    }

    /// Base URL override for `service`, if configured
    pub fn base_url(&self, service: &str) -> Option<&str> {
        self.section(service)?.base_url.as_deref()
    }

    /// Country code for `service`, if configured
    pub fn country_code(&self, service: &str) -> Option<&str> {
        self.section(service)?.country_code.as_deref()
    }

    fn section(&self, service: &str) -> Option<&ServiceSection> {
        match service {
            WEATHER_SERVICE => self.file.openweathermap.as_ref(),
            DIRECTORY_SERVICE => self.file.jsonplaceholder.as_ref(),
            _ => None,
        }
    }
}
