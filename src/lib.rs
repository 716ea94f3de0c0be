//! vjsgen - A Rust-native CLI for generating video.js plugin manifests
//!
//! vjsgen generates and regenerates the `package.json` manifest of a
//! video.js plugin project: baseline fields, optional tooling features,
//! and a canonical key ordering that keeps re-runs diff-friendly.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to merge)
//! - [`merge`] - The manifest-merging engine: Compose → Features → Reconcile → Order
//! - [`core`] - Domain types, generation context, version registry, config
//! - [`project`] - Reading and writing `package.json` on disk
//! - [`ui`] - User interaction utilities
//!
//! # Correctness Invariants
//!
//! vjsgen maintains the following invariants:
//!
//! 1. The merge engine is pure: no I/O, no mutation of its inputs
//! 2. Every dependency the engine emits resolves in the packaged version registry
//! 3. Re-running the engine on its own output produces byte-identical results
//! 4. Hand-edited manifest entries the tool does not manage survive regeneration

pub mod cli;
pub mod core;
pub mod merge;
pub mod project;
pub mod ui;
