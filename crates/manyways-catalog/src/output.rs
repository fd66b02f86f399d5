//! Writing the rendered document.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The document could not be written.
#[derive(Debug, thiserror::Error)]
#[error("Failed to write {}: {source}", .path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Write the document, replacing any existing file.
///
/// Missing parent directories are created.
pub fn write_document(path: &Path, html: &str) -> Result<(), WriteError> {
    let fail = |source| WriteError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(fail)?;
    }

    fs::write(path, html).map_err(fail)?;

    tracing::debug!("Wrote {} bytes to {}", html.len(), path.display());

    Ok(())
}
