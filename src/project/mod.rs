//! project
//!
//! Reading and writing `package.json` on disk.
//!
//! # Design
//!
//! The merge engine never touches the filesystem; this module is the
//! collaborator that feeds it a parsed manifest and serializes the
//! result back. A missing manifest reads as the empty document (fresh
//! projects have nothing to reconcile), but a *malformed* manifest is
//! an error: silently regenerating over a file the user broke would
//! destroy their edits.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::manifest::Manifest;

/// The manifest file name.
pub const MANIFEST_FILE: &str = "package.json";

/// Errors from project file operations.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Path to the manifest inside a project directory.
pub fn manifest_path(dir: &Path) -> PathBuf {
    dir.join(MANIFEST_FILE)
}

/// Read the project manifest.
///
/// A missing file yields the empty manifest.
///
/// # Errors
///
/// Returns `ProjectError::Read` on I/O failure and `ProjectError::Parse`
/// if the file exists but is not a JSON object.
pub fn read_manifest(dir: &Path) -> Result<Manifest, ProjectError> {
    let path = manifest_path(dir);
    if !path.exists() {
        return Ok(Manifest::new());
    }

    let contents = fs::read_to_string(&path).map_err(|e| ProjectError::Read {
        path: path.clone(),
        source: e,
    })?;

    Manifest::parse(&contents).map_err(|e| ProjectError::Parse {
        path,
        message: e.to_string(),
    })
}

/// Write the project manifest in its canonical on-disk form.
///
/// # Errors
///
/// Returns `ProjectError::Write` on I/O failure.
pub fn write_manifest(dir: &Path, manifest: &Manifest) -> Result<(), ProjectError> {
    let path = manifest_path(dir);
    fs::write(&path, manifest.to_json_string()).map_err(|e| ProjectError::Write {
        path,
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_manifest_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let manifest = read_manifest(dir.path()).unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn roundtrip() {
        let dir = TempDir::new().unwrap();
        let manifest = Manifest::parse(r#"{"name": "videojs-x", "version": "1.0.0"}"#).unwrap();

        write_manifest(dir.path(), &manifest).unwrap();
        let read = read_manifest(dir.path()).unwrap();
        assert_eq!(manifest, read);
    }

    #[test]
    fn written_form_is_stable() {
        let dir = TempDir::new().unwrap();
        let manifest = Manifest::parse(r#"{"name": "videojs-x"}"#).unwrap();

        write_manifest(dir.path(), &manifest).unwrap();
        let first = fs::read_to_string(manifest_path(dir.path())).unwrap();

        let read = read_manifest(dir.path()).unwrap();
        write_manifest(dir.path(), &read).unwrap();
        let second = fs::read_to_string(manifest_path(dir.path())).unwrap();

        assert_eq!(first, second);
        assert!(first.ends_with('\n'));
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(manifest_path(dir.path()), "{ not json").unwrap();
        assert!(matches!(
            read_manifest(dir.path()),
            Err(ProjectError::Parse { .. })
        ));
    }

    #[test]
    fn non_object_manifest_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(manifest_path(dir.path()), "[1, 2, 3]").unwrap();
        assert!(matches!(
            read_manifest(dir.path()),
            Err(ProjectError::Parse { .. })
        ));
    }
}
