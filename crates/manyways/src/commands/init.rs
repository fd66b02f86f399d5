//! Initialize a catalog project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use manyways_templates::{defaults, Fragment};

use crate::config::DEFAULT_CONFIG;

/// Run the init command in `root`.
///
/// Existing files are kept unless `yes` is set.
pub fn run(root: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing manyways in {}...", root.display());

    let templates_dir = root.join("templates");
    if !templates_dir.exists() {
        fs::create_dir_all(&templates_dir).context("Failed to create templates directory")?;
    }

    write_file(&root.join("manyways.toml"), DEFAULT_CONFIG, yes)?;
    write_file(&root.join("catalog.toml"), DEFAULT_CATALOG, yes)?;

    for fragment in Fragment::ALL {
        write_file(
            &templates_dir.join(fragment.file_name()),
            defaults::text(fragment),
            yes,
        )?;
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'manyways build' to render the catalog.");

    Ok(())
}

fn write_file(path: &Path, content: &str, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        tracing::warn!("{} already exists. Use --yes to overwrite.", path.display());
        return Ok(());
    }

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Created {}", path.display());

    Ok(())
}

const DEFAULT_CATALOG: &str = r#"# Technologies every entry below can refer to, by name.

[[technology]]
name = "AWK"

[[technology]]
name = "Coreutils"

[[technology]]
name = "Perl"

[[group]]
title = "Print multiple files with each line prepended by file name"
id = "each-line-with-filename"
task = "Print all text files with .log extension in the current directory. Prepend each line of each file with its filename."

[[group.entry]]
technology = "Perl"
command = '''perl -nE 'print "$ARGV:"; print; close ARGV if eof' *.log'''

[[group.entry]]
technology = "AWK"
command = '''awk '{ print FILENAME ":" $0 }' *.log'''

[[group.entry]]
technology = "Coreutils"
command = '''grep "" *.log'''
comment = "An empty pattern matches every line; grep prefixes matches with the file name when given several files."
"#;
