//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config`, or the default location if it exists)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Remote endpoints.
    pub feeds: FeedConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// p5.js version for the stock template.
    pub p5_version: Option<String>,
    /// Template repository used instead of the stock scaffold.
    pub template_repo: Option<String>,
    /// Name of the sketches container inside generated projects.
    pub projects_dir: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            p5_version: None,
            template_repo: None,
            projects_dir: "sketches".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Root of the prompt feed.
    pub prompts_url: String,
    /// Gallery template repository (degit syntax). Empty disables it.
    pub gallery_repo: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            prompts_url: "https://genuary.art".into(),
            gallery_repo: "sableRaf/genuary-gallery-templates/templates/default".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// With `--config` the file must exist and parse; without it, a missing
    /// file at the default location just means defaults.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => {
                let path = Self::config_path();
                if path.is_file() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> CliResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| CliError::ConfigError {
            message: format!("could not read {}", path.display()),
            source: Some(Box::new(e)),
        })?;
        toml::from_str(&raw).map_err(|e| CliError::ConfigError {
            message: format!("could not parse {}", path.display()),
            source: Some(Box::new(e)),
        })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.genuary.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("art", "genuary", "genuary")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".genuary.toml"))
    }
}
