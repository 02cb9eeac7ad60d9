//! Content loader - discovers and builds posts from the content directory

use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{Post, PostBuilder};
use crate::config::Config;

/// Loads posts from the content directory
pub struct ContentLoader<'a> {
    config: &'a Config,
    builder: PostBuilder<'a>,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            builder: PostBuilder::new(config),
        }
    }

    /// Find the markdown sources, newest first.
    ///
    /// Only files directly inside the content directory count. They are sorted
    /// by file name in reverse, so `YYYY-MM-DD-` prefixed names list newest
    /// first.
    pub fn find_sources(&self) -> Result<Vec<PathBuf>> {
        let mut sources = Vec::new();

        for entry in WalkDir::new(&self.config.content_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                sources.push(path.to_path_buf());
            }
        }

        sources.sort_by(|a, b| b.file_name().cmp(&a.file_name()));

        Ok(sources)
    }

    /// Load all posts in listing order.
    ///
    /// A file that can't be read is logged and skipped; the rest of the batch
    /// still loads.
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let sources = self.find_sources()?;
        if sources.is_empty() {
            tracing::info!("No markdown files found in {:?}", self.config.content_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::with_capacity(sources.len());
        for path in &sources {
            match self.builder.build(path) {
                Ok(post) => posts.push(post),
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {}", path, e);
                }
            }
        }

        Ok(posts)
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup(files: &[(&str, &str)]) -> (TempDir, Config) {
        let dir = TempDir::new().unwrap();
        let content_dir = dir.path().join("content");
        fs::create_dir_all(&content_dir).unwrap();
        for (name, text) in files {
            fs::write(content_dir.join(name), text).unwrap();
        }
        let config = Config {
            content_dir,
            output_dir: dir.path().join("writing"),
            root_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        (dir, config)
    }

    #[test]
    fn test_sources_newest_first() {
        let (_dir, config) = setup(&[
            ("2024-01-01-a.md", "# A"),
            ("2024-02-01-b.md", "# B"),
            ("2023-12-31-c.md", "# C"),
        ]);
        let loader = ContentLoader::new(&config);
        let names: Vec<_> = loader
            .find_sources()
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["2024-02-01-b.md", "2024-01-01-a.md", "2023-12-31-c.md"]
        );
    }

    #[test]
    fn test_only_markdown_at_top_level() {
        let (_dir, config) = setup(&[
            ("2024-01-01-a.md", "a"),
            ("notes.txt", "skip"),
            ("draft.markdown", "skip"),
        ]);
        fs::create_dir_all(config.content_dir.join("assets")).unwrap();
        fs::write(config.content_dir.join("assets/nested.md"), "skip").unwrap();

        let loader = ContentLoader::new(&config);
        let sources = loader.find_sources().unwrap();
        assert_eq!(sources, vec![config.content_dir.join("2024-01-01-a.md")]);
    }

    #[test]
    fn test_empty_content_dir() {
        let (_dir, config) = setup(&[]);
        let posts = ContentLoader::new(&config).load_posts().unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn test_load_posts_in_order() {
        let (_dir, config) = setup(&[
            ("2024-01-01-a.md", "# First\n\nhello"),
            ("2024-02-01-b.md", "# Second\n\nworld"),
        ]);
        let posts = ContentLoader::new(&config).load_posts().unwrap();
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Second", "First"]);
    }

    #[test]
    fn test_unreadable_file_skipped() {
        let (_dir, config) = setup(&[("2024-01-01-ok.md", "# Ok")]);
        // invalid UTF-8 fails to read as text
        fs::write(config.content_dir.join("2024-02-01-bad.md"), [0xff, 0xfe, 0x00]).unwrap();

        let posts = ContentLoader::new(&config).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Ok");
    }
}
