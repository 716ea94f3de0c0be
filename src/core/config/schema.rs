//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$VJSGEN_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/vjsgen/config.toml`
//! 3. `~/.vjsgen/config.toml` (canonical write location)
//!
//! # Project Config
//!
//! Located at `.vjsgenrc.toml` in the project directory. Holds the
//! options of the previous generator run so a bare re-run regenerates
//! with the same choices.
//!
//! # Validation
//!
//! Config values are validated after parsing to ensure they conform to
//! expected formats (e.g., a saved name must be a valid plugin name).

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::PluginName;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// author = "Jane Doe"
/// license = "Apache-2.0"
///
/// [defaults]
/// docs = true
/// precommit = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Default author for new plugins
    pub author: Option<String>,

    /// Default license identifier
    pub license: Option<String>,

    /// Default feature flags
    pub defaults: Option<FeatureDefaults>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(license) = &self.license {
            if license.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "license cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Default feature flags, applied when neither a CLI flag nor a saved
/// project option decides.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FeatureDefaults {
    pub docs: Option<bool>,
    pub css: Option<bool>,
    pub lang: Option<bool>,
    pub precommit: Option<bool>,
    pub prepush: Option<bool>,
}

/// Saved per-project generation options.
///
/// # Example
///
/// ```toml
/// name = "videojs-wombat"
/// description = "A wombat-powered playback plugin"
/// author = "Jane Doe"
/// license = "MIT"
/// docs = true
/// css = false
/// lang = false
/// precommit = true
/// prepush = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Plugin name (with or without the `videojs-` prefix)
    pub name: Option<String>,

    /// Plugin description
    pub description: Option<String>,

    /// Plugin author
    pub author: Option<String>,

    /// License identifier
    pub license: Option<String>,

    pub docs: Option<bool>,
    pub css: Option<bool>,
    pub lang: Option<bool>,
    pub precommit: Option<bool>,
    pub prepush: Option<bool>,
}

impl ProjectConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(name) = &self.name {
            PluginName::new(name)
                .map_err(|e| ConfigError::InvalidValue(format!("invalid saved name: {}", e)))?;
        }

        if let Some(license) = &self.license {
            if license.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "license cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
