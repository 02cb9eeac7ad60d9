//! CLI entry point for sssg

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sssg::config::SiteConfig;
use sssg::Site;

#[derive(Parser)]
#[command(name = "sssg")]
#[command(version)]
#[command(about = "Turn a folder of markdown posts into HTML pages", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(flatten)]
    dirs: DirArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Directory overrides for `_config.yml`
#[derive(Args)]
struct DirArgs {
    /// Input directory containing markdown files (default: content/)
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Output directory for generated HTML (default: writing/)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Directory receiving the index page (default: base directory)
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,
}

impl DirArgs {
    /// Load the site config from `base_dir` and apply the overrides
    fn load_site(self, base_dir: &Path) -> Result<Site> {
        let mut site_config = SiteConfig::load_from_dir(base_dir)?;
        if let Some(input) = self.input {
            site_config.content_dir = input;
        }
        if let Some(output) = self.output {
            site_config.output_dir = output;
        }
        if let Some(root) = self.root {
            site_config.root_dir = root;
        }
        Site::with_config(base_dir, site_config)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate static files (default)
    #[command(alias = "g")]
    Generate,

    /// List posts in index order
    List,

    /// Remove generated pages, assets and the index
    Clean,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug { "sssg=debug,info" } else { "sssg=info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    match cli.command.unwrap_or(Commands::Generate) {
        Commands::Generate => {
            let site = cli.dirs.load_site(&base_dir)?;
            let count = site.generate()?;
            println!("Generated {} posts successfully!", count);
        }

        Commands::List => {
            let site = cli.dirs.load_site(&base_dir)?;
            site.list()?;
        }

        Commands::Clean => {
            let site = cli.dirs.load_site(&base_dir)?;
            let removed = site.clean()?;
            println!("Cleaned {} generated files", removed);
        }

        Commands::Version => {
            println!("sssg version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
