//! core::context
//!
//! The generation context: options and feature flags for one merge call.
//!
//! # Design
//!
//! A [`GenContext`] is read-only input to the merge engine. It is
//! constructed once by the CLI layer (from flags, saved config, and
//! prompts) and never mutated by the engine.

use serde::{Deserialize, Serialize};

use super::types::PluginName;

/// Options describing the target plugin project.
///
/// Feature flags control the optional blocks the merge engine adds or
/// strips:
///
/// - `docs` - documentation tooling (jsdoc, doctoc)
/// - `css` - stylesheet build pipeline (postcss)
/// - `lang` - localization tooling (videojs-languages)
/// - `precommit` - pre-commit hook plus staged-file filter
/// - `prepush` - pre-push hook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenContext {
    pub plugin_name: PluginName,
    pub version: String,
    pub description: String,
    pub author: String,
    pub license_name: String,
    pub docs: bool,
    pub css: bool,
    pub lang: bool,
    pub precommit: bool,
    pub prepush: bool,
}

impl GenContext {
    /// Create a context with the stock defaults: version `1.0.0`, MIT
    /// license, hooks on, optional tooling off.
    pub fn new(plugin_name: PluginName) -> Self {
        Self {
            plugin_name,
            version: "1.0.0".to_string(),
            description: String::new(),
            author: String::new(),
            license_name: "MIT".to_string(),
            docs: false,
            css: false,
            lang: false,
            precommit: true,
            prepush: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let ctx = GenContext::new(PluginName::new("wombat").unwrap());
        assert_eq!(ctx.version, "1.0.0");
        assert_eq!(ctx.license_name, "MIT");
        assert!(!ctx.docs);
        assert!(!ctx.css);
        assert!(!ctx.lang);
        assert!(ctx.precommit);
        assert!(ctx.prepush);
    }

    #[test]
    fn serde_roundtrip() {
        let mut ctx = GenContext::new(PluginName::new("wombat").unwrap());
        ctx.docs = true;
        ctx.author = "Jane Doe".to_string();
        let json = serde_json::to_string(&ctx).unwrap();
        let parsed: GenContext = serde_json::from_str(&json).unwrap();
        assert_eq!(ctx, parsed);
    }
}
