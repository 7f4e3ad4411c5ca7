use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use log::debug;
use serde::Deserialize;

use crate::figma::DEFAULT_API_BASE_URL;
use crate::render::OutputFormat;

/// Settings read from `config.toml`. Every key is optional.
///
/// ```toml
/// format = "summary"
/// api_base_url = "https://api.figma.com"
/// timeout = "45s"
/// output = "design-notes"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default output format when `--format` is not given.
    pub format: Option<String>,
    pub api_base_url: String,
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
    /// Directory extraction results are written into when `--output` is absent.
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            output: None,
        }
    }
}

pub(crate) fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "figx")
}

impl Config {
    /// `<config dir>/figx/config.toml` for the current platform.
    pub fn central_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Explicit path > central config file > defaults. A missing central
    /// file is not an error; a missing explicit one is.
    pub fn load(path: Option<&Path>) -> Result<Self, String> {
        if let Some(path) = path {
            debug!("loading config from {}", path.display());
            return Self::from_file(path);
        }

        match Self::central_config_path() {
            Some(central) if central.exists() => {
                debug!("loading config from {}", central.display());
                Self::from_file(&central)
            }
            _ => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, String> {
        let raw = fs::read_to_string(path).map_err(|e| e.to_string())?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, String> {
        toml::from_str(raw).map_err(|e| e.to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api_base_url.trim().is_empty() {
            return Err("api_base_url must not be empty".to_string());
        }
        if self.timeout.is_zero() {
            return Err("timeout must be greater than zero".to_string());
        }
        if let Some(format) = self.format.as_deref() {
            format
                .parse::<OutputFormat>()
                .map_err(|e| format!("output format: {e}"))?;
        }
        Ok(())
    }

    /// Configured default format, falling back to the AI prompt.
    pub fn default_format(&self) -> OutputFormat {
        self.format
            .as_deref()
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    }
}
