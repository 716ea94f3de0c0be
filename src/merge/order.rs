//! merge::order
//!
//! The Canonical Orderer: a pure re-ordering pass over the merged
//! document. No values change; only key and element order.
//!
//! # Ordering rules
//!
//! - Top level: the known manifest fields in a fixed canonical order,
//!   then any remaining fields in their existing relative order.
//! - `dependencies`, `devDependencies`: ascending lexical key order.
//! - `keywords`, `files`: ascending lexical element order.
//! - `scripts`: lexical order of core script names, with lifecycle
//!   scripts (`pre<name>`/`post<name>`) placed immediately before and
//!   after their core script. See [`order_scripts`].
//!
//! Lifecycle adjacency matters because npm runs `pre`/`post` scripts
//! around their core script; keeping them adjacent in the manifest
//! keeps declaration order aligned with execution order.

use serde_json::Value;

use crate::core::manifest::{JsonMap, Manifest};

/// Canonical order for the top-level fields this tool manages.
/// Unmanaged fields follow in their existing relative order.
const FIELD_ORDER: &[&str] = &[
    "name",
    "version",
    "description",
    "author",
    "license",
    "main",
    "module",
    "browserslist",
    "engines",
    "files",
    "keywords",
    "scripts",
    "dependencies",
    "devDependencies",
    "vjsstandard",
    "husky",
    "lint-staged",
];

/// Normalize a manifest into canonical key ordering.
pub fn normalize(manifest: &Manifest) -> Manifest {
    let fields = manifest.fields();
    let mut result = Manifest::new();

    for key in FIELD_ORDER {
        if let Some(value) = fields.get(*key) {
            result.insert(*key, normalize_field(key, value));
        }
    }

    for (key, value) in fields {
        if !FIELD_ORDER.contains(&key.as_str()) {
            result.insert(key.clone(), normalize_field(key, value));
        }
    }

    result
}

/// Apply the field-specific ordering rule, leaving values untouched.
fn normalize_field(key: &str, value: &Value) -> Value {
    match (key, value) {
        ("scripts", Value::Object(map)) => Value::Object(order_scripts(map)),
        ("dependencies" | "devDependencies", Value::Object(map)) => {
            Value::Object(alphabetize(map))
        }
        ("keywords" | "files", Value::Array(items)) => Value::Array(sort_strings(items)),
        _ => value.clone(),
    }
}

/// Re-key a map into ascending lexical key order.
fn alphabetize(map: &JsonMap) -> JsonMap {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();
    keys.into_iter()
        .map(|k| (k.clone(), map[k].clone()))
        .collect()
}

/// Sort an all-string array lexically. Arrays holding any non-string
/// element are left untouched.
fn sort_strings(items: &[Value]) -> Vec<Value> {
    if !items.iter().all(Value::is_string) {
        return items.to_vec();
    }
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| a.as_str().cmp(&b.as_str()));
    sorted
}

/// Order the scripts map with lifecycle pairing.
///
/// A name is a *lifecycle* script when it is `pre<suffix>` or
/// `post<suffix>` and a script named exactly `<suffix>` exists in the
/// map; it is placed immediately before (`pre`) or after (`post`) that
/// script. Lifecycle chains nest: `prepretest` attaches before
/// `pretest`, which attaches before `test`.
///
/// Every other name is a root. Roots that carry a `pre`/`post` prefix
/// with no matching script (including a literal `pre` or `post`) are
/// orphans, appended at the end in insertion order. Remaining roots
/// sort lexically at the front.
fn order_scripts(scripts: &JsonMap) -> JsonMap {
    let is_lifecycle = |name: &str| -> bool {
        let suffix = name
            .strip_prefix("pre")
            .or_else(|| name.strip_prefix("post"));
        match suffix {
            Some(s) => !s.is_empty() && scripts.contains_key(s),
            None => false,
        }
    };

    let mut cores = Vec::new();
    let mut orphans = Vec::new();
    for name in scripts.keys() {
        if is_lifecycle(name) {
            continue;
        }
        if name.starts_with("pre") || name.starts_with("post") {
            orphans.push(name.as_str());
        } else {
            cores.push(name.as_str());
        }
    }
    cores.sort_unstable();

    // Emit each root with its lifecycle chain: pre-chain, root, post-chain.
    fn visit<'a>(name: &'a str, scripts: &'a JsonMap, out: &mut Vec<&'a str>) {
        let pre = format!("pre{}", name);
        if let Some((key, _)) = scripts.get_key_value(pre.as_str()) {
            visit(key, scripts, out);
        }
        out.push(name);
        let post = format!("post{}", name);
        if let Some((key, _)) = scripts.get_key_value(post.as_str()) {
            visit(key, scripts, out);
        }
    }

    let mut order = Vec::with_capacity(scripts.len());
    for core in cores {
        visit(core, scripts, &mut order);
    }
    for orphan in orphans {
        visit(orphan, scripts, &mut order);
    }

    order
        .into_iter()
        .map(|k| (k.to_string(), scripts[k].clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn script_map(names: &[&str]) -> JsonMap {
        names
            .iter()
            .map(|n| ((*n).to_string(), Value::String(format!("run {}", n))))
            .collect()
    }

    fn ordered_names(map: &JsonMap) -> Vec<&str> {
        map.keys().map(String::as_str).collect()
    }

    mod scripts {
        use super::*;

        #[test]
        fn lifecycle_pairs_are_adjacent() {
            let ordered = order_scripts(&script_map(&["postinstall", "build", "prebuild"]));
            assert_eq!(ordered_names(&ordered), ["prebuild", "build", "postinstall"]);
        }

        #[test]
        fn cores_sort_lexically() {
            let ordered = order_scripts(&script_map(&["watch", "build", "lint", "clean"]));
            assert_eq!(ordered_names(&ordered), ["build", "clean", "lint", "watch"]);
        }

        #[test]
        fn pre_and_post_surround_core() {
            let ordered = order_scripts(&script_map(&["posttest", "test", "pretest", "build"]));
            assert_eq!(
                ordered_names(&ordered),
                ["build", "pretest", "test", "posttest"]
            );
        }

        #[test]
        fn orphans_append_in_insertion_order() {
            let ordered = order_scripts(&script_map(&["postinstall", "build", "prepublishOnly"]));
            assert_eq!(
                ordered_names(&ordered),
                ["build", "postinstall", "prepublishOnly"]
            );
        }

        #[test]
        fn literal_pre_and_post_are_orphans() {
            let ordered = order_scripts(&script_map(&["pre", "build", "post"]));
            assert_eq!(ordered_names(&ordered), ["build", "pre", "post"]);
        }

        #[test]
        fn lifecycle_chains_nest() {
            let ordered = order_scripts(&script_map(&["test", "prepretest", "pretest"]));
            assert_eq!(ordered_names(&ordered), ["prepretest", "pretest", "test"]);
        }

        #[test]
        fn lifecycle_of_orphan_attaches_to_it() {
            // "postinstall" is an orphan; "prepostinstall" is its lifecycle.
            let ordered = order_scripts(&script_map(&["prepostinstall", "postinstall", "build"]));
            assert_eq!(
                ordered_names(&ordered),
                ["build", "prepostinstall", "postinstall"]
            );
        }

        #[test]
        fn values_are_untouched() {
            let ordered = order_scripts(&script_map(&["b", "a"]));
            assert_eq!(ordered.get("a").unwrap(), "run a");
            assert_eq!(ordered.get("b").unwrap(), "run b");
        }
    }

    mod maps_and_lists {
        use super::*;

        #[test]
        fn dependency_maps_alphabetize() {
            let manifest =
                Manifest::parse(r#"{"dependencies": {"video.js": "^7", "global": "^4"}}"#).unwrap();
            let normalized = normalize(&manifest);
            let deps = normalized.object("dependencies");
            let keys: Vec<&String> = deps.keys().collect();
            assert_eq!(keys, ["global", "video.js"]);
        }

        #[test]
        fn keywords_sort() {
            let manifest =
                Manifest::parse(r#"{"keywords": ["videojs", "streaming", "videojs-plugin"]}"#)
                    .unwrap();
            let normalized = normalize(&manifest);
            assert_eq!(
                normalized.strings("keywords"),
                vec!["streaming", "videojs", "videojs-plugin"]
            );
        }

        #[test]
        fn mixed_type_list_left_untouched() {
            let manifest = Manifest::parse(r#"{"keywords": ["b", 1, "a"]}"#).unwrap();
            let normalized = normalize(&manifest);
            assert_eq!(normalized.get("keywords").unwrap(), &json!(["b", 1, "a"]));
        }
    }

    mod top_level {
        use super::*;

        #[test]
        fn known_fields_take_canonical_order() {
            let manifest =
                Manifest::parse(r#"{"scripts": {}, "version": "1.0.0", "name": "videojs-x"}"#)
                    .unwrap();
            let normalized = normalize(&manifest);
            let keys: Vec<&String> = normalized.fields().keys().collect();
            assert_eq!(keys, ["name", "version", "scripts"]);
        }

        #[test]
        fn unknown_fields_keep_relative_order() {
            let manifest = Manifest::parse(
                r#"{"zeta": 1, "name": "videojs-x", "alpha": 2}"#,
            )
            .unwrap();
            let normalized = normalize(&manifest);
            let keys: Vec<&String> = normalized.fields().keys().collect();
            assert_eq!(keys, ["name", "zeta", "alpha"]);
        }

        #[test]
        fn normalize_is_idempotent() {
            let manifest = Manifest::parse(
                r#"{
                    "scripts": {"postinstall": "i", "build": "b", "prebuild": "p"},
                    "devDependencies": {"b": "2", "a": "1"},
                    "keywords": ["z", "a"],
                    "name": "videojs-x",
                    "custom": true
                }"#,
            )
            .unwrap();
            let once = normalize(&manifest);
            let twice = normalize(&once);
            assert_eq!(once.to_json_string(), twice.to_json_string());
        }
    }
}
