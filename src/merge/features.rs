//! merge::features
//!
//! The Conditional Merger: optional tooling blocks toggled by the
//! context's feature flags.
//!
//! # Design
//!
//! Each feature is independent; any combination of flags coexists and
//! the result does not depend on application order. An enabled feature
//! adds scripts, dependency resolutions, or tooling blocks. A disabled
//! hook feature additionally *strips* its keys from the reconciled
//! document, so remnants in the current manifest do not survive. The
//! strip pass runs after reconciliation for exactly that reason.

use serde_json::{json, Value};

use crate::core::context::GenContext;
use crate::core::manifest::Manifest;
use crate::core::registry::VersionRegistry;

use super::baseline::{resolve_set, subst};
use super::MergeError;

const DOCS_SCRIPTS: &[(&str, &str)] = &[
    ("docs", "npm-run-all docs:*"),
    ("docs:api", "jsdoc src -r -d docs/api"),
    ("docs:toc", "doctoc --notitle README.md"),
];
const DOCS_DEV_DEPENDENCIES: &[&str] = &["doctoc", "jsdoc"];

const CSS_SCRIPTS: &[(&str, &str)] = &[
    (
        "build:css",
        "postcss -o dist/%s.css --config scripts/postcss.config.js src/plugin.css",
    ),
    ("watch:css", "npm run build:css -- -w"),
];
const CSS_DEV_DEPENDENCIES: &[&str] = &["postcss", "postcss-cli"];

const LANG_SCRIPTS: &[(&str, &str)] = &[("build:lang", "vjslang --dir dist/lang")];
const LANG_DEV_DEPENDENCIES: &[&str] = &["videojs-languages"];

const HOOK_DEV_DEPENDENCIES: &[&str] = &["husky", "lint-staged"];

/// Script names owned by the docs feature; removed when docs is off.
const DOCS_SCRIPT_NAMES: &[&str] = &["docs", "docs:api", "docs:toc"];

/// Hook tooling script names; removed when both hook features are off.
const HOOK_SCRIPT_NAMES: &[&str] = &["husky", "lint-staged"];

/// Apply every enabled feature to the composed manifest.
///
/// # Errors
///
/// Returns `MergeError::Registry` if a feature devDependency does not
/// resolve; the whole merge aborts.
pub fn apply(
    mut manifest: Manifest,
    ctx: &GenContext,
    registry: &VersionRegistry,
) -> Result<Manifest, MergeError> {
    if ctx.docs {
        add_scripts(&mut manifest, DOCS_SCRIPTS, ctx);
        add_dev_dependencies(&mut manifest, DOCS_DEV_DEPENDENCIES, registry)?;
    }

    if ctx.css {
        add_scripts(&mut manifest, CSS_SCRIPTS, ctx);
        add_dev_dependencies(&mut manifest, CSS_DEV_DEPENDENCIES, registry)?;
    }

    if ctx.lang {
        add_scripts(&mut manifest, LANG_SCRIPTS, ctx);
        add_dev_dependencies(&mut manifest, LANG_DEV_DEPENDENCIES, registry)?;
    }

    if ctx.precommit || ctx.prepush {
        add_dev_dependencies(&mut manifest, HOOK_DEV_DEPENDENCIES, registry)?;

        let mut hooks = serde_json::Map::new();
        if ctx.precommit {
            hooks.insert("pre-commit".to_string(), json!("lint-staged"));
        }
        if ctx.prepush {
            hooks.insert("pre-push".to_string(), json!("npm run lint"));
        }
        manifest.insert("husky", json!({ "hooks": hooks }));
    }

    if ctx.precommit {
        manifest.insert(
            "lint-staged",
            json!({
                "*.js": ["vjsstandard --fix", "git add"],
                "README.md": ["doctoc --notitle", "git add"]
            }),
        );
    }

    Ok(manifest)
}

/// Remove the keys of disabled features from the reconciled document.
///
/// This runs on the post-reconcile manifest so that entries carried
/// over from the current document are removed too.
pub fn strip_disabled(mut manifest: Manifest, ctx: &GenContext) -> Manifest {
    if !ctx.docs {
        remove_scripts(&mut manifest, DOCS_SCRIPT_NAMES);
    }

    if !ctx.precommit {
        manifest.remove("lint-staged");
        remove_hook(&mut manifest, "pre-commit");
        remove_dev_dependency(&mut manifest, "lint-staged");
        remove_scripts(&mut manifest, &["precommit"]);
    }

    if !ctx.prepush {
        remove_hook(&mut manifest, "pre-push");
        remove_scripts(&mut manifest, &["prepush"]);
    }

    if !ctx.precommit && !ctx.prepush {
        manifest.remove("husky");
        remove_dev_dependency(&mut manifest, "husky");
        // Legacy layouts kept hook commands in the script table.
        remove_scripts(&mut manifest, HOOK_SCRIPT_NAMES);
    }

    manifest
}

fn add_scripts(manifest: &mut Manifest, scripts: &[(&str, &str)], ctx: &GenContext) {
    let mut table = manifest.object("scripts");
    for (name, command) in scripts.iter().copied() {
        table.insert(name.to_string(), Value::String(subst(command, ctx)));
    }
    manifest.insert("scripts", Value::Object(table));
}

fn remove_scripts(manifest: &mut Manifest, names: &[&str]) {
    if !manifest.contains_key("scripts") {
        return;
    }
    let mut table = manifest.object("scripts");
    for name in names.iter().copied() {
        table.remove(name);
    }
    manifest.insert("scripts", Value::Object(table));
}

fn add_dev_dependencies(
    manifest: &mut Manifest,
    names: &[&str],
    registry: &VersionRegistry,
) -> Result<(), MergeError> {
    let resolved = resolve_set(names, registry)?;
    let mut table = manifest.object("devDependencies");
    table.extend(resolved);
    manifest.insert("devDependencies", Value::Object(table));
    Ok(())
}

fn remove_dev_dependency(manifest: &mut Manifest, name: &str) {
    if !manifest.contains_key("devDependencies") {
        return;
    }
    let mut table = manifest.object("devDependencies");
    table.remove(name);
    manifest.insert("devDependencies", Value::Object(table));
}

/// Remove one entry from the `husky.hooks` block, dropping the block
/// when it empties.
fn remove_hook(manifest: &mut Manifest, hook: &str) {
    if !manifest.contains_key("husky") {
        return;
    }

    let mut husky = manifest.object("husky");
    let mut hooks = match husky.get("hooks") {
        Some(Value::Object(map)) => map.clone(),
        _ => serde_json::Map::new(),
    };
    hooks.remove(hook);

    if hooks.is_empty() {
        manifest.remove("husky");
    } else {
        husky.insert("hooks".to_string(), Value::Object(hooks));
        manifest.insert("husky", Value::Object(husky));
    }
}
