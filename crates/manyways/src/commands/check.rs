//! Validate the catalog and fragments without writing anything.

use std::path::Path;

use anyhow::{Context, Result};
use manyways_catalog::load_catalog;
use manyways_templates::DirectoryStore;

use crate::commands::build::Overrides;

/// Run the check command.
pub fn run(config: &Path, overrides: Overrides) -> Result<()> {
    let settings = overrides.apply(config)?;

    let loaded = load_catalog(&settings.catalog)
        .with_context(|| format!("Failed to load {}", settings.catalog.display()))?;
    let catalog = loaded.catalog;

    let store = DirectoryStore::new(&settings.templates);
    for path in store.unrecognized() {
        tracing::warn!("Ignoring unrecognized fragment {}", path.display());
    }

    catalog
        .render(&store)
        .context("Failed to render catalog")?;

    // stricter than build, which only warns
    let duplicates = catalog.duplicate_ids();
    if !duplicates.is_empty() {
        anyhow::bail!("Duplicate group ids: {}", duplicates.join(", "));
    }

    let unused = loaded
        .technologies
        .iter()
        .filter(|t| {
            !catalog
                .groups()
                .iter()
                .flat_map(|g| g.entries())
                .any(|e| e.technology() == *t)
        })
        .map(|t| t.name())
        .collect::<Vec<_>>();
    if !unused.is_empty() {
        tracing::warn!("Technologies without entries: {}", unused.join(", "));
    }

    tracing::info!(
        "Catalog OK: {} groups, {} entries, {} technologies",
        catalog.len(),
        catalog.entry_count(),
        loaded.technologies.len()
    );

    Ok(())
}
