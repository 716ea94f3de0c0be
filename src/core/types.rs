//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`PluginName`] - Validated video.js plugin name
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use vjsgen::core::types::PluginName;
//!
//! // Valid constructions
//! let name = PluginName::new("hls-quality").unwrap();
//! assert_eq!(name.package_name(), "videojs-hls-quality");
//!
//! // Invalid constructions fail at creation time
//! assert!(PluginName::new("Invalid Name").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid plugin name: {0}")]
    InvalidPluginName(String),

    #[error("invalid npm scope: {0}")]
    InvalidScope(String),
}

/// A validated video.js plugin name.
///
/// Plugin names follow npm package-name rules, restricted to the subset
/// the video.js ecosystem actually uses:
/// - Lowercase ASCII letters, digits, `-`, `.`, `_`
/// - Must start with a letter or digit
/// - Cannot end with `-`
/// - An optional npm scope (`@scope/`) is accepted and preserved
///
/// The conventional `videojs-` prefix is stripped on construction, so the
/// stored identifier is the bare plugin id. `"videojs-foo"`, `"foo"`, and
/// `"@me/videojs-foo"` all normalize to the id `foo`.
///
/// # Example
///
/// ```
/// use vjsgen::core::types::PluginName;
///
/// let name = PluginName::new("videojs-hls-quality").unwrap();
/// assert_eq!(name.id(), "hls-quality");
/// assert_eq!(name.basename(), "videojs-hls-quality");
/// assert_eq!(name.package_name(), "videojs-hls-quality");
///
/// let scoped = PluginName::new("@brightcove/player-loader").unwrap();
/// assert_eq!(scoped.id(), "player-loader");
/// assert_eq!(scoped.basename(), "videojs-player-loader");
/// assert_eq!(scoped.package_name(), "@brightcove/videojs-player-loader");
///
/// // Invalid plugin names
/// assert!(PluginName::new("").is_err());
/// assert!(PluginName::new("videojs-").is_err());
/// assert!(PluginName::new("UPPER").is_err());
/// assert!(PluginName::new("trailing-").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PluginName {
    scope: Option<String>,
    id: String,
}

impl PluginName {
    /// Create a new validated plugin name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidPluginName` or `TypeError::InvalidScope`
    /// if the name violates npm naming rules.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();

        let (scope, rest) = match name.strip_prefix('@') {
            Some(scoped) => match scoped.split_once('/') {
                Some((scope, rest)) => {
                    Self::validate_part(scope)
                        .map_err(|m| TypeError::InvalidScope(format!("'@{}': {}", scope, m)))?;
                    (Some(scope.to_string()), rest)
                }
                None => {
                    return Err(TypeError::InvalidScope(format!(
                        "'{}': scope must be followed by '/'",
                        name
                    )));
                }
            },
            None => (None, name.as_str()),
        };

        // The conventional prefix is implied, never stored.
        let id = rest.strip_prefix("videojs-").unwrap_or(rest);

        Self::validate_part(id)
            .map_err(|m| TypeError::InvalidPluginName(format!("'{}': {}", name, m)))?;

        Ok(Self {
            scope,
            id: id.to_string(),
        })
    }

    /// Validate one dash-separated name component against npm naming rules.
    fn validate_part(part: &str) -> Result<(), String> {
        if part.is_empty() {
            return Err("cannot be empty".to_string());
        }

        let mut chars = part.chars();
        let first = chars.next().unwrap();
        if !first.is_ascii_lowercase() && !first.is_ascii_digit() {
            return Err("must start with a lowercase letter or digit".to_string());
        }

        if part.ends_with('-') {
            return Err("cannot end with '-'".to_string());
        }

        for c in part.chars() {
            if !c.is_ascii_lowercase() && !c.is_ascii_digit() && !matches!(c, '-' | '.' | '_') {
                return Err(format!("invalid character '{}'", c));
            }
        }

        Ok(())
    }

    /// The bare plugin id, without scope or `videojs-` prefix.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The npm scope, if any, without the leading `@`.
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// The unscoped package name: `videojs-<id>`.
    ///
    /// This is the identifier substituted into script commands and
    /// entry-point paths.
    pub fn basename(&self) -> String {
        format!("videojs-{}", self.id)
    }

    /// The full npm package name, including scope when present.
    pub fn package_name(&self) -> String {
        match &self.scope {
            Some(scope) => format!("@{}/videojs-{}", scope, self.id),
            None => self.basename(),
        }
    }
}

impl std::fmt::Display for PluginName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.package_name())
    }
}

impl TryFrom<String> for PluginName {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PluginName> for String {
    fn from(name: PluginName) -> Self {
        name.package_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod plugin_name {
        use super::*;

        #[test]
        fn bare_id() {
            let name = PluginName::new("wombat").unwrap();
            assert_eq!(name.id(), "wombat");
            assert_eq!(name.scope(), None);
            assert_eq!(name.basename(), "videojs-wombat");
            assert_eq!(name.package_name(), "videojs-wombat");
        }

        #[test]
        fn prefix_stripped() {
            let name = PluginName::new("videojs-wombat").unwrap();
            assert_eq!(name.id(), "wombat");
            assert_eq!(name.package_name(), "videojs-wombat");
        }

        #[test]
        fn scoped() {
            let name = PluginName::new("@org/wombat").unwrap();
            assert_eq!(name.id(), "wombat");
            assert_eq!(name.scope(), Some("org"));
            assert_eq!(name.basename(), "videojs-wombat");
            assert_eq!(name.package_name(), "@org/videojs-wombat");
        }

        #[test]
        fn scoped_with_prefix() {
            let name = PluginName::new("@org/videojs-wombat").unwrap();
            assert_eq!(name.id(), "wombat");
            assert_eq!(name.package_name(), "@org/videojs-wombat");
        }

        #[test]
        fn rejects_empty() {
            assert!(PluginName::new("").is_err());
        }

        #[test]
        fn rejects_prefix_only() {
            assert!(PluginName::new("videojs-").is_err());
        }

        #[test]
        fn rejects_uppercase() {
            assert!(PluginName::new("Wombat").is_err());
        }

        #[test]
        fn rejects_spaces() {
            assert!(PluginName::new("my plugin").is_err());
        }

        #[test]
        fn rejects_trailing_hyphen() {
            assert!(PluginName::new("wombat-").is_err());
        }

        #[test]
        fn rejects_leading_hyphen() {
            assert!(PluginName::new("-wombat").is_err());
        }

        #[test]
        fn rejects_scope_without_slash() {
            assert!(PluginName::new("@org").is_err());
        }

        #[test]
        fn rejects_empty_scope() {
            assert!(PluginName::new("@/wombat").is_err());
        }

        #[test]
        fn digits_and_separators_allowed() {
            assert!(PluginName::new("hls2.quality_menu").is_ok());
        }

        #[test]
        fn serde_roundtrip() {
            let name = PluginName::new("@org/videojs-wombat").unwrap();
            let json = serde_json::to_string(&name).unwrap();
            assert_eq!(json, "\"@org/videojs-wombat\"");
            let parsed: PluginName = serde_json::from_str(&json).unwrap();
            assert_eq!(name, parsed);
        }

        #[test]
        fn serde_rejects_invalid() {
            let result: Result<PluginName, _> = serde_json::from_str("\"not valid!\"");
            assert!(result.is_err());
        }
    }
}
