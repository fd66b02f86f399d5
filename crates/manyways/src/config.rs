//! Configuration file (manyways.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    catalog: CatalogConfig,
    #[serde(default)]
    templates: TemplatesConfig,
    #[serde(default)]
    output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogConfig {
    #[serde(default = "default_catalog_file")]
    file: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TemplatesConfig {
    #[serde(default = "default_templates_dir")]
    dir: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OutputConfig {
    #[serde(default = "default_output_file")]
    file: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            file: default_catalog_file(),
        }
    }
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            dir: default_templates_dir(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: default_output_file(),
        }
    }
}

fn default_catalog_file() -> String {
    "catalog.toml".to_string()
}
fn default_templates_dir() -> String {
    "templates".to_string()
}
fn default_output_file() -> String {
    "index.html".to_string()
}

/// Resolved paths for one run.
///
/// Relative paths in the config file are resolved against the directory
/// holding the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub catalog: PathBuf,
    pub templates: PathBuf,
    pub output: PathBuf,
}

impl Settings {
    /// Load settings from a config file, falling back to defaults if it does not exist.
    /// Returns an error if the config file exists but is malformed.
    pub fn load(config_path: &Path) -> Result<Self> {
        let base = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let file = if config_path.exists() {
            let content = fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let file: ConfigFile = toml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?;
            tracing::debug!("Loaded config from {}", config_path.display());
            file
        } else {
            tracing::debug!(
                "No config at {}, using defaults",
                config_path.display()
            );
            ConfigFile::default()
        };

        Ok(Self {
            catalog: base.join(file.catalog.file),
            templates: base.join(file.templates.dir),
            output: base.join(file.output.file),
        })
    }
}

/// Default config written by `manyways init`.
pub const DEFAULT_CONFIG: &str = r#"# manyways configuration

[catalog]
# Catalog file with technologies, groups and entries
file = "catalog.toml"

[templates]
# Directory holding page, group, entry and toc_entry .template.html files
dir = "templates"

[output]
# Rendered document, overwritten on every build
file = "index.html"
"#;
