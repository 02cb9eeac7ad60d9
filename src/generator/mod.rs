//! Generator module - writes post pages, the index page and assets

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::config::Config;
use crate::content::Post;
use crate::templates::TemplateRenderer;

/// Name of the assets directory, in both content and output directories
pub const ASSETS_DIR: &str = "assets";

/// Static site generator using Tera templates
pub struct Generator<'a> {
    config: &'a Config,
    renderer: TemplateRenderer,
}

impl<'a> Generator<'a> {
    /// Create a new generator
    pub fn new(config: &'a Config) -> Result<Self> {
        Ok(Self {
            config,
            renderer: TemplateRenderer::new()?,
        })
    }

    /// Generate the entire site from posts in listing order
    pub fn generate(&self, posts: &[Post]) -> Result<()> {
        fs::create_dir_all(&self.config.output_dir)?;

        self.copy_assets()?;

        for post in posts {
            self.write_post(post)?;
        }

        self.write_index(posts)?;

        Ok(())
    }

    /// Write one post page to its output path
    pub fn write_post(&self, post: &Post) -> Result<()> {
        let html = self.renderer.render_post(post, self.config)?;
        write_file(&post.output, &html)?;
        tracing::debug!("Generated: {:?}", post.output);
        Ok(())
    }

    /// Write the index page listing every post
    pub fn write_index(&self, posts: &[Post]) -> Result<()> {
        let html = self.renderer.render_index(posts, self.config)?;
        let index_path = self.config.index_path();
        write_file(&index_path, &html)?;
        tracing::info!("Wrote index of {} posts to {:?}", posts.len(), index_path);
        Ok(())
    }

    /// Mirror `content_dir/assets` into `output_dir/assets`.
    ///
    /// Any previous output assets are removed first. Hidden files and
    /// directories are skipped.
    pub fn copy_assets(&self) -> Result<()> {
        let source_dir = self.config.content_dir.join(ASSETS_DIR);
        if !source_dir.is_dir() {
            return Ok(());
        }

        let dest_dir = self.config.output_dir.join(ASSETS_DIR);
        if dest_dir.exists() {
            fs::remove_dir_all(&dest_dir)
                .with_context(|| format!("Failed to remove {:?}", dest_dir))?;
        }

        let mut copied = 0;
        for entry in WalkDir::new(&source_dir)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()))
        {
            let entry = entry?;
            let path = entry.path();
            let dest = dest_dir.join(path.strip_prefix(&source_dir)?);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&dest)?;
            } else {
                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(path, &dest)
                    .with_context(|| format!("Failed to copy {:?} -> {:?}", path, dest))?;
                tracing::debug!("Copied: {:?} -> {:?}", path, dest);
                copied += 1;
            }
        }

        tracing::info!("Copied {} asset files", copied);
        Ok(())
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentLoader;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Config) {
        let dir = TempDir::new().unwrap();
        let content_dir = dir.path().join("content");
        fs::create_dir_all(&content_dir).unwrap();
        let config = Config {
            content_dir,
            output_dir: dir.path().join("writing"),
            root_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        (dir, config)
    }

    #[test]
    fn test_generate_writes_pages_and_index() {
        let (_dir, config) = setup();
        fs::write(
            config.content_dir.join("2024-01-01-a.md"),
            "# Alpha\n\nfirst **post**",
        )
        .unwrap();
        fs::write(config.content_dir.join("2024-02-01-b.md"), "# Beta\n\n$x$").unwrap();

        let posts = ContentLoader::new(&config).load_posts().unwrap();
        Generator::new(&config).unwrap().generate(&posts).unwrap();

        let a = fs::read_to_string(config.output_dir.join("2024-01-01-a.html")).unwrap();
        assert!(a.contains("<strong>post</strong>"));
        assert!(!a.contains("mathjax"));

        let b = fs::read_to_string(config.output_dir.join("2024-02-01-b.html")).unwrap();
        assert!(b.contains(r"\(x\)"));
        assert!(b.contains("mathjax"));

        let index = fs::read_to_string(config.index_path()).unwrap();
        let beta = index.find("Beta").unwrap();
        let alpha = index.find("Alpha").unwrap();
        assert!(beta < alpha);
    }

    #[test]
    fn test_generate_empty_site() {
        let (_dir, config) = setup();
        Generator::new(&config).unwrap().generate(&[]).unwrap();

        let index = fs::read_to_string(config.index_path()).unwrap();
        assert!(index.contains("<p>Posts:</p>"));
        assert!(!index.contains("<u>"));
    }

    #[test]
    fn test_copy_assets_replaces_old_files() {
        let (_dir, config) = setup();
        let assets = config.content_dir.join(ASSETS_DIR);
        fs::create_dir_all(assets.join("img")).unwrap();
        fs::write(assets.join("img/cat.png"), b"png").unwrap();
        fs::write(assets.join(".DS_Store"), b"junk").unwrap();

        let stale = config.output_dir.join(ASSETS_DIR).join("old.png");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, b"old").unwrap();

        Generator::new(&config).unwrap().copy_assets().unwrap();

        let out = config.output_dir.join(ASSETS_DIR);
        assert_eq!(fs::read(out.join("img/cat.png")).unwrap(), b"png");
        assert!(!out.join(".DS_Store").exists());
        assert!(!stale.exists());
    }

    #[test]
    fn test_no_assets_dir_is_fine() {
        let (_dir, config) = setup();
        Generator::new(&config).unwrap().copy_assets().unwrap();
        assert!(!config.output_dir.join(ASSETS_DIR).exists());
    }
}
