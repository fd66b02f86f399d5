//! Catalog files: the TOML population source.
//!
//! ```toml
//! [[technology]]
//! name = "AWK"
//! url = "https://www.gnu.org/software/gawk/"
//!
//! [[group]]
//! title = "Print lines"
//! id = "print-lines"
//! task = "Print every line of a file."
//!
//! [[group.entry]]
//! technology = "AWK"
//! command = "awk 1 file"
//! comment = "A true pattern prints the line."
//! ```
//!
//! Technologies are registered in file order before any group is read, so
//! entries may refer to any technology declared in the file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::Catalog;
use crate::entry::EntryError;
use crate::technology::{RegistryError, TechnologyRegistry};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default, rename = "technology")]
    technologies: Vec<TechnologyDef>,

    #[serde(default, rename = "group")]
    groups: Vec<GroupDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TechnologyDef {
    name: String,
    #[serde(default)]
    url: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GroupDef {
    title: String,
    id: String,
    task: String,
    #[serde(default, rename = "entry")]
    entries: Vec<EntryDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EntryDef {
    technology: String,
    command: String,
    #[serde(default)]
    comment: String,
}

/// A populated catalog together with the technologies it references.
#[derive(Debug)]
pub struct LoadedCatalog {
    pub technologies: TechnologyRegistry,
    pub catalog: Catalog,
}

/// Errors that can occur when loading a catalog file.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to read catalog file: {0}")]
    ReadError(String),

    #[error("Invalid catalog file: {0}")]
    InvalidCatalog(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Group '{group}' refers to unknown technology '{technology}'")]
    UnknownTechnology { group: String, technology: String },

    #[error("Group '{group}': {source}")]
    Entry {
        group: String,
        #[source]
        source: EntryError,
    },
}

/// Read and populate a catalog from a TOML file.
pub fn load_catalog(path: &Path) -> Result<LoadedCatalog, SourceError> {
    let text = fs::read_to_string(path)
        .map_err(|e| SourceError::ReadError(format!("{}: {}", path.display(), e)))?;

    let loaded = parse_catalog(&text)?;

    tracing::info!(
        "Loaded {} groups and {} technologies from {}",
        loaded.catalog.len(),
        loaded.technologies.len(),
        path.display()
    );

    Ok(loaded)
}

/// Populate a catalog from TOML text.
pub fn parse_catalog(text: &str) -> Result<LoadedCatalog, SourceError> {
    let file: CatalogFile =
        toml::from_str(text).map_err(|e| SourceError::InvalidCatalog(e.to_string()))?;

    let mut technologies = TechnologyRegistry::new();
    for def in &file.technologies {
        technologies.register(&def.name, &def.url)?;
    }

    let mut catalog = Catalog::new();
    for def in file.groups {
        let group = catalog.add_group(def.title, def.id, def.task);

        for entry in def.entries {
            let Some(technology) = technologies.get(entry.technology.trim()) else {
                return Err(SourceError::UnknownTechnology {
                    group: group.id().to_string(),
                    technology: entry.technology,
                });
            };

            let added = group
                .add_entry(technology, &entry.command, &entry.comment)
                .map(|_| ());
            added.map_err(|source| SourceError::Entry {
                group: group.id().to_string(),
                source,
            })?;
        }
    }

    Ok(LoadedCatalog {
        technologies,
        catalog,
    })
}
