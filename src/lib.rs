//! sssg: a small static site generator for markdown writing
//!
//! Every `*.md` file in the content directory becomes one HTML page, and an
//! index page lists all of them newest first. Only a small markdown subset is
//! understood; see [`content::transform`] for the exact rules.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The main site application
#[derive(Debug, Clone)]
pub struct Site {
    /// Base directory that relative config paths are resolved against
    pub base_dir: PathBuf,
    /// Resolved configuration
    pub config: config::Config,
}

impl Site {
    /// Create a site from a directory, reading its `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let site_config = config::SiteConfig::load_from_dir(base_dir.as_ref())?;
        Self::with_config(base_dir, site_config)
    }

    /// Create a site from a directory and an explicit configuration
    pub fn with_config<P: AsRef<Path>>(
        base_dir: P,
        site_config: config::SiteConfig,
    ) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config = site_config.resolve(&base_dir)?;

        Ok(Self { base_dir, config })
    }

    /// Generate the static site, returning the number of posts written
    pub fn generate(&self) -> Result<usize> {
        commands::generate::run(self)
    }

    /// Remove generated files, returning the number of paths deleted
    pub fn clean(&self) -> Result<usize> {
        commands::clean::run(self)
    }

    /// Print the post listing
    pub fn list(&self) -> Result<()> {
        commands::list::run(self)
    }
}
