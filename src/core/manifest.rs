//! core::manifest
//!
//! The ordered manifest document.
//!
//! # Design
//!
//! A manifest is a tree of string-keyed fields backed by
//! `serde_json::Map`, compiled with `preserve_order` so every object is
//! an explicit ordered sequence of key/value pairs. Output ordering is a
//! real, testable data structure rather than an incidental property of
//! the runtime.
//!
//! Accessors are permissive: a missing or malformed field reads as an
//! empty value. Strictness about user data lives at the I/O boundary
//! ([`crate::project`]), not here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An ordered JSON object, the building block of manifest fields.
pub type JsonMap = serde_json::Map<String, Value>;

/// A `package.json` manifest document.
///
/// # Example
///
/// ```
/// use vjsgen::core::manifest::Manifest;
///
/// let manifest = Manifest::parse(r#"{"name": "videojs-wombat"}"#).unwrap();
/// assert_eq!(manifest.get("name").unwrap(), "videojs-wombat");
/// assert!(manifest.object("scripts").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest(JsonMap);

impl Manifest {
    /// Create an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a manifest from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the underlying serde error if the text is not a JSON
    /// object. Callers that want to treat malformed input permissively
    /// decide that at their own layer.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Wrap an already-parsed value. Non-object values become the empty
    /// manifest.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// Borrow the underlying ordered map.
    pub fn fields(&self) -> &JsonMap {
        &self.0
    }

    /// Consume the manifest, yielding the underlying ordered map.
    pub fn into_fields(self) -> JsonMap {
        self.0
    }

    /// Get a top-level field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set a top-level field. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Remove a top-level field.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get a nested object field as an owned map.
    ///
    /// Missing or non-object fields read as the empty map.
    pub fn object(&self, key: &str) -> JsonMap {
        match self.0.get(key) {
            Some(Value::Object(map)) => map.clone(),
            _ => JsonMap::new(),
        }
    }

    /// Get a string-list field.
    ///
    /// Missing or non-array fields read as the empty list; non-string
    /// elements are skipped.
    pub fn strings(&self, key: &str) -> Vec<String> {
        match self.0.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Get a string field. Missing or non-string fields read as `None`.
    pub fn string(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Serialize to the canonical on-disk form: two-space indentation
    /// with a trailing newline. Byte-stable for identical documents.
    pub fn to_json_string(&self) -> String {
        // Serialization of an in-memory map cannot fail.
        let mut text = serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| "{}".to_string());
        text.push('\n');
        text
    }
}

impl FromIterator<(String, Value)> for Manifest {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(JsonMap::from_iter(iter))
    }
}
