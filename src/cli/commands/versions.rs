//! versions command - Show the dependency versions this tool pins

use anyhow::Result;

use crate::core::registry::VersionRegistry;

/// Print the packaged version table, one entry per line, sorted by name.
pub fn versions() -> Result<()> {
    let registry = VersionRegistry::packaged();
    let width = registry.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

    for (name, version) in registry.iter() {
        println!("{:<width$}  {}", name, version, width = width);
    }

    Ok(())
}
