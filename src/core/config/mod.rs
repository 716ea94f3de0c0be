//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! vjsgen has two configuration scopes:
//! - **Global**: user-level defaults (author, license, feature flags)
//! - **Project**: the options saved by the previous generator run
//!
//! # Precedence
//!
//! Option values are resolved in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Global config file
//! 3. Saved project config
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$VJSGEN_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/vjsgen/config.toml`
//! 3. `~/.vjsgen/config.toml` (canonical write location)
//!
//! # Project Config Location
//!
//! `.vjsgenrc.toml` in the project directory.

pub mod schema;

pub use schema::{FeatureDefaults, GlobalConfig, ProjectConfig};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The saved-options file written next to `package.json`.
pub const PROJECT_CONFIG_FILE: &str = ".vjsgenrc.toml";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Merged configuration from all sources.
///
/// Accessor methods apply precedence automatically: saved project
/// options override global defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Saved project options (if the project has been generated before)
    pub project: Option<ProjectConfig>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `project_dir` is provided, also loads the saved project
    /// options from `.vjsgenrc.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed or
    /// fail validation. Missing config files are not an error
    /// (defaults are used).
    pub fn load(project_dir: Option<&Path>) -> Result<Self, ConfigError> {
        let global = Self::load_global()?;

        let project = match project_dir {
            Some(dir) => Self::load_project(dir)?,
            None => None,
        };

        global.validate()?;
        if let Some(ref p) = project {
            p.validate()?;
        }

        Ok(Config { global, project })
    }

    /// Load global configuration from standard locations.
    fn load_global() -> Result<GlobalConfig, ConfigError> {
        // 1. Check $VJSGEN_CONFIG
        if let Ok(path) = std::env::var("VJSGEN_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Self::read_config(&path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/vjsgen/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("vjsgen/config.toml");
            if path.exists() {
                return Self::read_config(&path);
            }
        }

        // 3. Check ~/.vjsgen/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".vjsgen/config.toml");
            if path.exists() {
                return Self::read_config(&path);
            }
        }

        // No config found, use defaults
        Ok(GlobalConfig::default())
    }

    /// Load the saved project options, if present.
    fn load_project(dir: &Path) -> Result<Option<ProjectConfig>, ConfigError> {
        let path = Self::project_config_path(dir);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(Self::read_config(&path)?))
    }

    /// Read and parse a TOML config file.
    fn read_config<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical path for global config.
    ///
    /// Returns `~/.vjsgen/config.toml`.
    pub fn global_config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".vjsgen/config.toml"))
    }

    /// Get the path for a project's saved options.
    pub fn project_config_path(dir: &Path) -> PathBuf {
        dir.join(PROJECT_CONFIG_FILE)
    }

    /// Write the saved project options atomically.
    ///
    /// Uses atomic write (write to temp file, then rename) to prevent
    /// corruption.
    pub fn write_project(dir: &Path, config: &ProjectConfig) -> Result<PathBuf, ConfigError> {
        let path = Self::project_config_path(dir);
        Self::write_config_atomic(&path, config)?;
        Ok(path)
    }

    /// Write a config file atomically.
    fn write_config_atomic<T: serde::Serialize>(
        path: &Path,
        config: &T,
    ) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Default author, project options winning over global.
    pub fn author(&self) -> Option<&str> {
        self.project
            .as_ref()
            .and_then(|p| p.author.as_deref())
            .or(self.global.author.as_deref())
    }

    /// Default license, project options winning over global.
    pub fn license(&self) -> Option<&str> {
        self.project
            .as_ref()
            .and_then(|p| p.license.as_deref())
            .or(self.global.license.as_deref())
    }

    /// Resolve a feature flag through the project-then-global chain.
    pub fn feature(&self, select: impl Fn(&FeatureDefaults) -> Option<bool>) -> Option<bool> {
        let project = self.project.as_ref().map(|p| FeatureDefaults {
            docs: p.docs,
            css: p.css,
            lang: p.lang,
            precommit: p.precommit,
            prepush: p.prepush,
        });

        project
            .as_ref()
            .and_then(&select)
            .or_else(|| self.global.defaults.as_ref().and_then(&select))
    }
}
