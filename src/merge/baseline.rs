//! merge::baseline
//!
//! The Baseline Composer: the fixed field set every generated manifest
//! carries.
//!
//! # Design
//!
//! Field values are either literal (engines, browser-support targets,
//! linter block) or derived from the generation context via `%s`
//! placeholder substitution (entry-point paths). The keyword set is a
//! union with the current document's keywords, so caller-added keywords
//! are never lost.
//!
//! Dependency entries are never written with ad-hoc versions: every
//! name resolves through the [`VersionRegistry`], and a resolution
//! failure aborts the whole merge.

use serde_json::{json, Value};

use crate::core::context::GenContext;
use crate::core::manifest::{JsonMap, Manifest};
use crate::core::registry::VersionRegistry;

use super::MergeError;

/// Keywords every video.js plugin manifest carries.
pub const BASELINE_KEYWORDS: &[&str] = &["videojs", "videojs-plugin"];

/// Runtime dependencies of a generated plugin.
pub const BASELINE_DEPENDENCIES: &[&str] = &["global", "video.js"];

/// Development dependencies of a generated plugin.
pub const BASELINE_DEV_DEPENDENCIES: &[&str] = &[
    "conventional-changelog-cli",
    "conventional-changelog-videojs",
    "karma",
    "not-prerelease",
    "npm-run-all",
    "pkg-ok",
    "rollup",
    "shx",
    "sinon",
    "videojs-generate-karma-config",
    "videojs-generate-rollup-config",
    "videojs-standard",
];

/// The baseline script table.
const BASELINE_SCRIPTS: &[(&str, &str)] = &[
    ("build", "npm-run-all -s clean -p build:*"),
    ("build:js", "rollup -c scripts/rollup.config.js"),
    ("clean", "shx rm -rf ./dist ./test/dist"),
    ("postclean", "shx mkdir -p ./dist ./test/dist"),
    ("lint", "vjsstandard"),
    ("prepublishOnly", "npm-run-all build && pkg-ok"),
    ("start", "npm-run-all -p server watch"),
    (
        "server",
        "karma start scripts/karma.conf.js --singleRun=false --auto-watch",
    ),
    (
        "test",
        "npm-run-all lint build && karma start scripts/karma.conf.js",
    ),
    ("posttest", "shx cat test/dist/coverage/text.txt"),
    ("preversion", "npm test"),
    (
        "update-changelog",
        "conventional-changelog -p videojs -i CHANGELOG.md -s",
    ),
    (
        "version",
        "is-prerelease || npm run update-changelog && git add CHANGELOG.md",
    ),
    ("watch", "npm-run-all -p watch:*"),
    ("watch:js", "npm run build:js -- -w"),
];

/// Files shipped with a published plugin.
const BASELINE_FILES: &[&str] = &[
    "CONTRIBUTING.md",
    "dist/",
    "docs/",
    "index.html",
    "scripts/",
    "src/",
    "test/",
];

/// Replace every `%s` placeholder with the plugin's unscoped package name.
pub(super) fn subst(template: &str, ctx: &GenContext) -> String {
    template.replace("%s", &ctx.plugin_name.basename())
}

/// Resolve a list of dependency names into a name → version map.
///
/// # Errors
///
/// Fails on the first name absent from the registry; no partial map is
/// returned to the caller.
pub(super) fn resolve_set(
    names: &[&str],
    registry: &VersionRegistry,
) -> Result<JsonMap, MergeError> {
    let mut map = JsonMap::new();
    for name in names.iter().copied() {
        let version = registry.resolve(name)?;
        map.insert(name.to_string(), Value::String(version.to_string()));
    }
    Ok(map)
}

/// Compose the baseline manifest for the given context.
///
/// `current` contributes only its keyword list (union semantics); all
/// other current-document fields are reconciled in a later stage.
///
/// # Errors
///
/// Returns `MergeError::Registry` if any baseline dependency name does
/// not resolve.
pub fn compose(
    current: &Manifest,
    ctx: &GenContext,
    registry: &VersionRegistry,
) -> Result<Manifest, MergeError> {
    let mut manifest = Manifest::new();

    manifest.insert("name", json!(ctx.plugin_name.package_name()));
    manifest.insert("version", json!(ctx.version));
    manifest.insert("description", json!(ctx.description));
    manifest.insert("author", json!(ctx.author));
    manifest.insert("license", json!(ctx.license_name));
    manifest.insert("main", json!(subst("dist/%s.cjs.js", ctx)));
    manifest.insert("module", json!(subst("dist/%s.es.js", ctx)));

    manifest.insert("keywords", Value::Array(keyword_union(current)));
    manifest.insert("browserslist", json!(["defaults", "ie 11"]));
    manifest.insert("engines", json!({ "node": ">=8" }));
    manifest.insert(
        "files",
        Value::Array(
            BASELINE_FILES
                .iter()
                .map(|f| Value::String((*f).to_string()))
                .collect(),
        ),
    );

    let mut scripts = JsonMap::new();
    for (name, command) in BASELINE_SCRIPTS.iter().copied() {
        scripts.insert(name.to_string(), Value::String(subst(command, ctx)));
    }
    manifest.insert("scripts", Value::Object(scripts));

    manifest.insert(
        "dependencies",
        Value::Object(resolve_set(BASELINE_DEPENDENCIES, registry)?),
    );
    manifest.insert(
        "devDependencies",
        Value::Object(resolve_set(BASELINE_DEV_DEPENDENCIES, registry)?),
    );

    manifest.insert(
        "vjsstandard",
        json!({ "ignore": ["dist", "docs", "test/dist"] }),
    );

    Ok(manifest)
}

/// Union of the current document's keywords with the baseline set,
/// deduplicated. Final lexical ordering happens in the canonical
/// orderer.
fn keyword_union(current: &Manifest) -> Vec<Value> {
    let mut seen = std::collections::BTreeSet::new();
    current
        .strings("keywords")
        .into_iter()
        .chain(BASELINE_KEYWORDS.iter().map(|k| (*k).to_string()))
        .filter(|k| seen.insert(k.clone()))
        .map(Value::String)
        .collect()
}
