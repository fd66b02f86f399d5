//! manyways CLI - render a catalog of equivalent command-line recipes.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

use commands::build::Overrides;

#[derive(Parser)]
#[command(name = "manyways")]
#[command(about = "Render a catalog of equivalent command-line recipes into one HTML page")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to manyways.toml config file
    #[arg(short, long, default_value = "manyways.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a config file, default fragments and a sample catalog
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Render the catalog into the output document
    Build {
        /// Output file (defaults to config or "index.html")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory holding the .template.html fragments
        #[arg(short, long)]
        templates: Option<PathBuf>,

        /// Catalog file to render
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Validate catalog and fragments without writing output
    Check {
        /// Directory holding the .template.html fragments
        #[arg(short, long)]
        templates: Option<PathBuf>,

        /// Catalog file to check
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Preview the rendered document
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// Directory to serve (defaults to the output file's directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            let root = cli.config.parent().unwrap_or(Path::new(""));
            let root = if root.as_os_str().is_empty() {
                Path::new(".")
            } else {
                root
            };
            commands::init::run(root, yes)?;
        }
        Commands::Build {
            output,
            templates,
            catalog,
        } => {
            let overrides = Overrides {
                output,
                templates,
                catalog,
            };
            commands::build::run(&cli.config, overrides)?;
        }
        Commands::Check { templates, catalog } => {
            let overrides = Overrides {
                output: None,
                templates,
                catalog,
            };
            commands::check::run(&cli.config, overrides)?;
        }
        Commands::Serve { port, dir } => {
            commands::serve::run(&cli.config, port, dir).await?;
        }
    }

    Ok(())
}
