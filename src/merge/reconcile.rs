//! merge::reconcile
//!
//! The Override Reconciler: merges the generated field set with the
//! project's existing manifest.
//!
//! # Merge semantics
//!
//! - Top level: shallow merge, generated value wins. Fields only the
//!   current document has survive untouched, in their original relative
//!   order.
//! - `scripts`, `dependencies`, `devDependencies`: keyed merge. The
//!   result starts from the current document's map, then every
//!   generated key is overlaid with the generated value winning. Hand
//!   added entries the tool does not manage survive regeneration;
//!   tool-managed entries are always refreshed.
//! - `keywords` is already a union by the time it reaches this stage
//!   (the baseline composer folds the current document's keywords in),
//!   so it merges as a plain generated-wins field.

use serde_json::Value;

use crate::core::manifest::Manifest;

/// Fields merged key-by-key instead of wholesale.
const KEYED_FIELDS: &[&str] = &["scripts", "dependencies", "devDependencies"];

/// Merge `generated` over `current`, returning the new document.
pub fn reconcile(current: &Manifest, generated: Manifest) -> Manifest {
    let mut result = current.clone();

    for (key, value) in generated.into_fields() {
        if KEYED_FIELDS.contains(&key.as_str()) {
            let mut merged = current.object(&key);
            if let Value::Object(entries) = value {
                merged.extend(entries);
            }
            result.insert(key, Value::Object(merged));
        } else {
            result.insert(key, value);
        }
    }

    result
}
