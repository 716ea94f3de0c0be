//! core::registry
//!
//! Version registry for packaged dependency constraints.
//!
//! # Design
//!
//! Every dependency entry the merge engine writes into a generated
//! manifest is resolved through a [`VersionRegistry`]. The registry is
//! an explicitly constructed, immutable value passed into the merge
//! call; nothing in the engine reads ambient global state.
//!
//! [`VersionRegistry::packaged`] builds the registry from the version
//! table compiled into this binary. A name the engine requests that is
//! missing from the registry is a fatal configuration error: it means
//! the tool's packaged table has drifted from the dependency sets the
//! engine promises to generate, and the whole merge must abort rather
//! than emit a partial manifest.

use std::collections::BTreeMap;

use thiserror::Error;

/// Errors from version resolution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The packaged version table has no entry for a requested name.
    #[error(
        "no packaged version for dependency '{name}'; \
         the packaged version table is out of sync with the generated dependency sets"
    )]
    Unresolved { name: String },
}

/// The version table compiled into this binary.
///
/// Covers the baseline dependency sets plus every feature-conditional
/// devDependency. Kept sorted by name for readability; the registry
/// itself re-sorts on construction.
const PACKAGED_VERSIONS: &[(&str, &str)] = &[
    // Baseline dependencies
    ("global", "^4.3.2"),
    ("video.js", "^7.3.0"),
    // Baseline devDependencies
    ("conventional-changelog-cli", "^2.0.1"),
    ("conventional-changelog-videojs", "^3.0.0"),
    ("karma", "^3.0.0"),
    ("not-prerelease", "^1.0.1"),
    ("npm-run-all", "^4.1.3"),
    ("pkg-ok", "^2.2.0"),
    ("rollup", "^0.66.2"),
    ("shx", "^0.3.2"),
    ("sinon", "^6.1.5"),
    ("videojs-generate-karma-config", "^5.0.0"),
    ("videojs-generate-rollup-config", "^2.2.0"),
    ("videojs-standard", "^8.0.2"),
    // docs feature
    ("doctoc", "^1.3.1"),
    ("jsdoc", "^3.5.5"),
    // css feature
    ("postcss", "^7.0.2"),
    ("postcss-cli", "^6.0.0"),
    // lang feature
    ("videojs-languages", "^1.0.0"),
    // hook features
    ("husky", "^1.0.0-rc.13"),
    ("lint-staged", "^7.2.2"),
];

/// Lookup from package name to resolved version-constraint string.
///
/// # Example
///
/// ```
/// use vjsgen::core::registry::VersionRegistry;
///
/// let registry = VersionRegistry::packaged();
/// assert_eq!(registry.resolve("video.js").unwrap(), "^7.3.0");
/// assert!(registry.resolve("left-pad").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionRegistry {
    versions: BTreeMap<String, String>,
}

impl VersionRegistry {
    /// Build the registry from the version table packaged with this tool.
    pub fn packaged() -> Self {
        Self::from_pairs(PACKAGED_VERSIONS.iter().copied())
    }

    /// Build a registry from explicit name/version pairs.
    pub fn from_pairs<I, N, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            versions: pairs
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }

    /// Resolve a package name to its version constraint.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Unresolved` if the name has no packaged
    /// version. Callers must treat this as fatal for the whole merge.
    pub fn resolve(&self, name: &str) -> Result<&str, RegistryError> {
        self.versions
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| RegistryError::Unresolved {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.versions.contains_key(name)
    }

    /// Iterate entries in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.versions.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}
