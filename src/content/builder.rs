//! Post builder - turns one markdown file into a [`Post`]

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::{markdown, Post};
use crate::config::Config;

/// Number of leading file name characters holding the `YYYY-MM-DD` date
const DATE_LEN: usize = 10;

/// Errors while building a single post
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Source path has no file name: {0:?}")]
    NoFileName(PathBuf),
}

/// Builds posts for a resolved site configuration
pub struct PostBuilder<'a> {
    config: &'a Config,
}

impl<'a> PostBuilder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Read, parse and render a post from a file
    pub fn build(&self, path: &Path) -> Result<Post, BuildError> {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .ok_or_else(|| BuildError::NoFileName(path.to_path_buf()))?;

        let text = fs::read_to_string(path).map_err(|source| BuildError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let (title, body) = split_title(&text);
        let date = date_from_stem(&stem);
        let output = self.config.output_dir.join(format!("{}.html", stem));

        tracing::debug!("Rendering {:?} -> {:?}", path, output);

        Ok(Post {
            title,
            date,
            raw: body.to_string(),
            content: markdown::render(body),
            has_math: body.contains('$'),
            has_embed: body.contains("<tweet>"),
            source: path.to_path_buf(),
            output,
        })
    }
}

/// Split a leading `# Title` line off the text.
///
/// Returns `(title, body)`. Only the first physical line is looked at; when it
/// is not a level-1 heading the title is empty and the body is the whole text.
pub fn split_title(text: &str) -> (String, &str) {
    let (first_line, rest) = match text.split_once('\n') {
        Some((line, rest)) => (line.trim_end_matches('\r'), rest),
        None => (text, ""),
    };

    match first_line.strip_prefix("# ") {
        Some(title) => (title.trim().to_string(), rest),
        None => (String::new(), text),
    }
}

/// Take the `YYYY-MM-DD` prefix of a file stem, verbatim and unvalidated
pub fn date_from_stem(stem: &str) -> String {
    if stem.chars().count() >= DATE_LEN {
        stem.chars().take(DATE_LEN).collect()
    } else {
        String::new()
    }
}
