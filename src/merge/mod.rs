//! merge
//!
//! The manifest-merging engine: Compose → Features → Reconcile → Order.
//!
//! # Architecture
//!
//! Generation is a pipeline of pure stages:
//!
//! 1. **Compose** ([`baseline`]): the fixed baseline field set, with
//!    identity fields from the context and dependency versions resolved
//!    through the registry.
//! 2. **Features** ([`features`]): optional tooling blocks toggled by
//!    the context's feature flags.
//! 3. **Reconcile** ([`reconcile`]): caller customizations in the
//!    current manifest survive; tool-managed keys are refreshed.
//! 4. **Order** ([`order`]): canonical, deterministic key ordering.
//!
//! Data flows strictly left to right. Every stage returns a new
//! document; the current manifest and the context are never mutated, so
//! concurrent and repeated invocations are safe by construction.
//!
//! # Invariants
//!
//! - Re-running [`generate`] on its own output is byte-stable
//! - A dependency name missing from the registry aborts the whole merge;
//!   no partial document is ever returned
//! - Feature flags are independent and commute

pub mod baseline;
pub mod features;
pub mod order;
pub mod reconcile;

use thiserror::Error;

use crate::core::context::GenContext;
use crate::core::manifest::Manifest;
use crate::core::registry::{RegistryError, VersionRegistry};

/// Errors from the merge engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MergeError {
    /// A baseline or feature dependency has no packaged version.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Produce the new manifest for a plugin project.
///
/// `current` is the project's existing manifest (empty for a fresh
/// project); it is read, never modified.
///
/// # Errors
///
/// Returns `MergeError::Registry` if any generated dependency name does
/// not resolve in `registry`.
///
/// # Example
///
/// ```
/// use vjsgen::core::context::GenContext;
/// use vjsgen::core::manifest::Manifest;
/// use vjsgen::core::registry::VersionRegistry;
/// use vjsgen::core::types::PluginName;
/// use vjsgen::merge::generate;
///
/// let ctx = GenContext::new(PluginName::new("wombat").unwrap());
/// let registry = VersionRegistry::packaged();
///
/// let manifest = generate(&Manifest::new(), &ctx, &registry).unwrap();
/// assert_eq!(manifest.string("name"), Some("videojs-wombat"));
/// ```
pub fn generate(
    current: &Manifest,
    ctx: &GenContext,
    registry: &VersionRegistry,
) -> Result<Manifest, MergeError> {
    let composed = baseline::compose(current, ctx, registry)?;
    let generated = features::apply(composed, ctx, registry)?;
    let reconciled = reconcile::reconcile(current, generated);
    let stripped = features::strip_disabled(reconciled, ctx);
    Ok(order::normalize(&stripped))
}
