//! Render the catalog into the output document.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use manyways_catalog::{load_catalog, write_document};
use manyways_templates::DirectoryStore;

use crate::config::Settings;

/// Command-line overrides of configured paths.
#[derive(Debug, Default)]
pub struct Overrides {
    pub output: Option<PathBuf>,
    pub templates: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
}

impl Overrides {
    /// Load settings and apply the overrides on top.
    pub fn apply(self, config: &Path) -> Result<Settings> {
        let mut settings = Settings::load(config)?;
        if let Some(output) = self.output {
            settings.output = output;
        }
        if let Some(templates) = self.templates {
            settings.templates = templates;
        }
        if let Some(catalog) = self.catalog {
            settings.catalog = catalog;
        }
        Ok(settings)
    }
}

/// Run the build command.
pub fn run(config: &Path, overrides: Overrides) -> Result<()> {
    tracing::info!("Building catalog page...");
    let start = Instant::now();

    let settings = overrides.apply(config)?;

    let loaded = load_catalog(&settings.catalog)
        .with_context(|| format!("Failed to load {}", settings.catalog.display()))?;
    let catalog = loaded.catalog;

    let store = DirectoryStore::new(&settings.templates);
    let html = catalog
        .render(&store)
        .context("Failed to render catalog")?;

    write_document(&settings.output, &html)?;

    tracing::info!(
        "Rendered {} groups with {} entries in {}ms",
        catalog.len(),
        catalog.entry_count(),
        start.elapsed().as_millis()
    );
    tracing::info!("Output: {}", settings.output.display());

    Ok(())
}
