//! Preview server command.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::Router;
use tower_http::services::ServeDir;

use crate::config::Settings;

/// Run the serve command.
///
/// Serves `dir`, or the directory holding the configured output file.
pub async fn run(config: &Path, port: u16, dir: Option<PathBuf>) -> Result<()> {
    let settings = Settings::load(config)?;

    let dir = match dir {
        Some(dir) => dir,
        None => settings
            .output
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };

    if !settings.output.exists() {
        tracing::warn!(
            "{} not found. Run 'manyways build' first.",
            settings.output.display()
        );
    }
    if !dir.exists() {
        anyhow::bail!("Directory not found: {}", dir.display());
    }

    let addr: SocketAddr = format!("127.0.0.1:{}", port)
        .parse()
        .context("Invalid address")?;

    tracing::info!("Serving {} at http://{}", dir.display(), addr);

    let app = Router::new().fallback_service(ServeDir::new(&dir));

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Open browser on the rendered page
    let page = settings
        .output
        .file_name()
        .and_then(|f| f.to_str())
        .unwrap_or("");
    let url = format!("http://{}/{}", addr, page);
    let _ = open::that(&url);

    axum::serve(listener, app).await?;

    Ok(())
}
